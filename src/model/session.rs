use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque key a front end uses to address its session in a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Per-user progress through the question catalog.
///
/// `responses` only ever holds perturbed text. The raw answer is dropped as
/// soon as it has been perturbed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub question_index: usize,
    pub responses: Vec<String>,
}

impl Session {
    pub fn is_complete(&self, catalog_len: usize) -> bool {
        self.question_index >= catalog_len
    }
}
