use serde::{Deserialize, Serialize};

/// A recommendation extracted from model output: a title line and the
/// ordered steps listed under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    pub title: String,
    pub steps: Vec<String>,
}
