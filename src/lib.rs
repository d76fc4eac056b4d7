pub mod app;
pub mod engine;
pub mod model;

pub use engine::llm_client::{ProviderError, TextGenerator};
pub use engine::pathway_parser::parse_pathways;
pub use engine::perturbation::{perturb, RandomSource, RngSource};
pub use engine::prompt_builder::PromptBuilder;
pub use engine::sequencer::{QuestionSequencer, Turn};
pub use engine::session_store::{InMemorySessionStore, SessionStore};
pub use model::pathway::Pathway;
pub use model::session::{Session, SessionId};
