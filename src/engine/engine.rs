use std::sync::mpsc::{Receiver, Sender};

use crate::engine::llm_client::TextGenerator;
use crate::engine::pathway_parser::parse_pathways;
use crate::engine::perturbation::{RandomSource, DEFAULT_PERTURBATION_PROBABILITY};
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::sequencer::{QuestionSequencer, Turn, COMPLETION_NOTICE, GREETING};
use crate::engine::session_store::SessionStore;
use crate::model::session::SessionId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub perturbation_probability: f64,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            perturbation_probability: DEFAULT_PERTURBATION_PROBABILITY,
            max_tokens: 2048,
            temperature: 0.6,
        }
    }
}

pub struct Engine {
    sequencer: QuestionSequencer,
    store: Box<dyn SessionStore>,
    rng: Box<dyn RandomSource + Send>,
    generator: Box<dyn TextGenerator>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(
        store: Box<dyn SessionStore>,
        rng: Box<dyn RandomSource + Send>,
        generator: Box<dyn TextGenerator>,
        config: EngineConfig,
    ) -> Self {
        Self {
            sequencer: QuestionSequencer::default(),
            store,
            rng,
            generator,
            config,
        }
    }

    /// Serves commands until the sending side hangs up.
    pub fn run(&mut self, rx: Receiver<EngineCommand>, tx: Sender<EngineResponse>) {
        while let Ok(cmd) = rx.recv() {
            if let Some(resp) = self.handle(cmd) {
                if tx.send(resp).is_err() {
                    break;
                }
            }
        }
        tracing::debug!("engine command channel closed");
    }

    pub fn handle(&mut self, cmd: EngineCommand) -> Option<EngineResponse> {
        match cmd {
            EngineCommand::StartSession { session } => {
                self.store.start(session);
                tracing::info!(%session, "session started");
                Some(EngineResponse::Greeting {
                    session,
                    text: GREETING,
                })
            }

            EngineCommand::UserInput { session, text } => Some(self.submit(session, &text)),

            EngineCommand::GeneratePathways { session } => Some(self.generate(session)),

            EngineCommand::EndSession { session } => {
                self.store.remove(&session);
                tracing::info!(%session, "session ended");
                None
            }
        }
    }

    fn submit(&mut self, id: SessionId, raw_input: &str) -> EngineResponse {
        let mut session = self.store.get(&id);
        let turn = self.sequencer.advance(
            &mut session,
            raw_input,
            self.config.perturbation_probability,
            self.rng.as_mut(),
        );

        tracing::debug!(
            session = %id,
            question_index = session.question_index,
            recorded = session.responses.len(),
            "answer submitted"
        );

        self.store.set(id, session);

        match turn {
            Turn::Question(text) => EngineResponse::Question { session: id, text },
            Turn::Complete => EngineResponse::Completed {
                session: id,
                text: COMPLETION_NOTICE,
            },
        }
    }

    fn generate(&mut self, id: SessionId) -> EngineResponse {
        let session = self.store.get(&id);
        let prompt = PromptBuilder::build(&session.responses);

        tracing::info!(
            session = %id,
            responses = session.responses.len(),
            prompt_len = prompt.len(),
            "requesting pathways"
        );

        match self
            .generator
            .invoke(&prompt, self.config.max_tokens, self.config.temperature)
        {
            Ok(raw) => {
                let pathways = parse_pathways(&raw);
                tracing::info!(session = %id, count = pathways.len(), "pathways parsed");
                EngineResponse::Pathways {
                    session: id,
                    pathways,
                }
            }
            Err(error) => {
                tracing::warn!(session = %id, %error, "pathway generation failed");
                EngineResponse::ProviderFailed { session: id, error }
            }
        }
    }
}
