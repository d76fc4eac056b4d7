use std::io::{BufRead, Write};
use std::sync::mpsc;

use anyhow::{anyhow, Result};

use crate::engine::engine::Engine;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::pathway::Pathway;
use crate::model::session::SessionId;

const HELP: &str = "Commands: /pathway to build your pathways, /restart to start over, /quit to exit.";

/* =========================
   Chat front end
   ========================= */

pub struct ChatApp {
    session: SessionId,
    complete: bool,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl ChatApp {
    pub fn new(mut engine: Engine) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            engine.run(cmd_rx, resp_tx);
        });

        Self {
            session: SessionId::new(),
            complete: false,
            cmd_tx,
            resp_rx,
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.start(out)?;

        for line in input.lines() {
            let line = line?;
            match line.trim() {
                "/quit" => break,
                "/restart" => self.start(out)?,
                "/help" => writeln!(out, "{HELP}")?,
                "/pathway" => self.request_pathways(out)?,
                "" => continue,
                _ => {
                    let resp = self.request(EngineCommand::UserInput {
                        session: self.session,
                        text: line,
                    })?;
                    self.show(resp, out)?;
                }
            }
        }

        self.cmd_tx
            .send(EngineCommand::EndSession {
                session: self.session,
            })
            .ok();
        Ok(())
    }

    /// Greets, then sends the empty opener that fetches the first question.
    fn start<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.complete = false;

        let greeting = self.request(EngineCommand::StartSession {
            session: self.session,
        })?;
        self.show(greeting, out)?;

        let first = self.request(EngineCommand::UserInput {
            session: self.session,
            text: String::new(),
        })?;
        self.show(first, out)
    }

    fn request_pathways<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if !self.complete {
            writeln!(out, "Please answer the remaining questions first.")?;
            return Ok(());
        }

        writeln!(out, "Creating your pathways...")?;
        let resp = self.request(EngineCommand::GeneratePathways {
            session: self.session,
        })?;
        self.show(resp, out)
    }

    fn request(&self, cmd: EngineCommand) -> Result<EngineResponse> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow!("engine stopped"))?;
        self.resp_rx.recv().map_err(|_| anyhow!("engine stopped"))
    }

    fn show<W: Write>(&mut self, resp: EngineResponse, out: &mut W) -> Result<()> {
        match resp {
            EngineResponse::Greeting { text, .. } => {
                writeln!(out, "Naavi: {text}")?;
                writeln!(out, "{HELP}")?;
            }
            EngineResponse::Question { text, .. } => writeln!(out, "Naavi: {text}")?,
            EngineResponse::Completed { text, .. } => {
                self.complete = true;
                writeln!(out, "Naavi: {text}")?;
                writeln!(out, "Type /pathway when you are ready.")?;
            }
            EngineResponse::Pathways { pathways, .. } => {
                if pathways.is_empty() {
                    writeln!(out, "No pathways could be read from the reply. Try /pathway again.")?;
                } else {
                    render_pathways(out, &pathways)?;
                }
            }
            EngineResponse::ProviderFailed { error, .. } => {
                writeln!(out, "Error generating AI response: {error}")?;
            }
        }
        Ok(())
    }
}

pub fn render_pathways<W: Write>(out: &mut W, pathways: &[Pathway]) -> std::io::Result<()> {
    for pathway in pathways {
        if pathway.title.is_empty() {
            writeln!(out, "Pathway")?;
        } else {
            writeln!(out, "{}", pathway.title)?;
        }
        for (i, step) in pathway.steps.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, step)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::engine::engine::EngineConfig;
    use crate::engine::llm_client::{ProviderError, TextGenerator};
    use crate::engine::perturbation::RngSource;
    use crate::engine::sequencer::QUESTIONS;
    use crate::engine::session_store::InMemorySessionStore;

    struct CannedGenerator(Option<&'static str>);

    impl TextGenerator for CannedGenerator {
        fn invoke(&self, _: &str, _: u32, _: f32) -> Result<String, ProviderError> {
            self.0
                .map(str::to_string)
                .ok_or(ProviderError::Status {
                    status: 500,
                    body: "boom".into(),
                })
        }
    }

    fn chat(reply: Option<&'static str>, script: &str) -> String {
        let engine = Engine::new(
            Box::new(InMemorySessionStore::new()),
            Box::new(RngSource::seeded(3)),
            Box::new(CannedGenerator(reply)),
            EngineConfig::default(),
        );
        let mut app = ChatApp::new(engine);
        let mut out = Vec::new();
        app.run(Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_conversation_renders_pathways() {
        let out = chat(
            Some("Pathway 1: Research\n  Join a lab\n  Publish\n"),
            "I study physics\nastronomy\nchess club\nonline lectures\n/pathway\n",
        );

        for q in QUESTIONS {
            assert!(out.contains(q), "missing question {q}");
        }
        assert!(out.contains("Type /pathway"));
        assert!(out.contains("Pathway 1: Research\n  1. Join a lab\n  2. Publish\n"));
    }

    #[test]
    fn pathway_before_completion_is_refused() {
        let out = chat(Some("Pathway 1: A\nstep\n"), "only one answer\n/pathway\n/quit\n");
        assert!(out.contains("Please answer the remaining questions first."));
        assert!(!out.contains("Creating your pathways"));
    }

    #[test]
    fn provider_error_is_reported() {
        let out = chat(None, "a\nb\nc\nd\n/pathway\n");
        assert!(out.contains("Error generating AI response: LLM endpoint returned 500: boom"));
    }

    #[test]
    fn blank_lines_do_not_answer_questions() {
        let out = chat(Some("Pathway 1: A\nstep\n"), "\n   \n\t\n\n/pathway\n/quit\n");
        assert!(out.contains(QUESTIONS[0]));
        assert!(!out.contains(QUESTIONS[1]));
        assert!(out.contains("Please answer the remaining questions first."));
    }

    #[test]
    fn restart_asks_first_question_again() {
        let out = chat(None, "a\n/restart\n/quit\n");
        assert_eq!(out.matches(QUESTIONS[0]).count(), 2);
    }

    #[test]
    fn untitled_pathway_gets_placeholder_heading() {
        let mut out = Vec::new();
        render_pathways(
            &mut out,
            &[Pathway {
                title: String::new(),
                steps: vec!["Explore".into()],
            }],
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Pathway\n  1. Explore\n\n");
    }
}
