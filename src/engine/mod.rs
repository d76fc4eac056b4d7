pub mod engine;
pub mod protocol;
pub mod session_store;

pub mod sequencer;
pub mod perturbation;
pub mod prompt_builder;
pub mod llm_client;
pub mod pathway_parser;
