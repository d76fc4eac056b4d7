/// Builds the prompt sent to the LLM once a session is complete.
/// Only formats text: responses pass through exactly as stored.
pub struct PromptBuilder;

pub const USER_ROLE_MARKER: &str = "user\n";
pub const ASSISTANT_ROLE_MARKER: &str = "assistant\n";

pub const PATHWAY_INSTRUCTIONS: &str = "
Based on the information provided, generate three distinct pathways for achieving the user's educational and career goals. Each pathway should be clearly separated and include step-by-step guidance. The output should be structured as follows:

Pathway 1: [Title]
  Step 1
  Step 2
  Step 3
  Step 4
  Step 5
 
 ...

Pathway 2: [Title]
  Step 1
  Step 2
  Step 3
  Step 4
  Step 5
 
 ...

Pathway 3: [Title]
  Step 1
  Step 2
  Step 3
  Step 4
  Step 5
 ...
";

impl PromptBuilder {
    pub fn build(responses: &[String]) -> String {
        let mut prompt = String::new();

        push_responses(&mut prompt, responses);
        push_instructions(&mut prompt);

        prompt
    }
}

fn push_responses(prompt: &mut String, responses: &[String]) {
    for (i, response) in responses.iter().enumerate() {
        if i > 0 {
            prompt.push('\n');
        }
        prompt.push_str(USER_ROLE_MARKER);
        prompt.push_str(response);
        prompt.push('\n');
    }
}

fn push_instructions(prompt: &mut String) {
    prompt.push_str(ASSISTANT_ROLE_MARKER);
    prompt.push_str(PATHWAY_INSTRUCTIONS);
    prompt.push('\n');
}
