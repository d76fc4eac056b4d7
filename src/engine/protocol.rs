use crate::engine::llm_client::ProviderError;
use crate::model::pathway::Pathway;
use crate::model::session::SessionId;

pub enum EngineCommand {
    StartSession { session: SessionId },
    UserInput { session: SessionId, text: String },
    GeneratePathways { session: SessionId },
    EndSession { session: SessionId },
}

#[derive(Debug)]
pub enum EngineResponse {
    Greeting {
        session: SessionId,
        text: &'static str,
    },

    Question {
        session: SessionId,
        text: &'static str,
    },

    Completed {
        session: SessionId,
        text: &'static str,
    },

    Pathways {
        session: SessionId,
        pathways: Vec<Pathway>,
    },

    ProviderFailed {
        session: SessionId,
        error: ProviderError,
    },
}
