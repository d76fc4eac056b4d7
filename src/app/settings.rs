use serde::{Deserialize, Serialize};

use crate::engine::engine::EngineConfig;
use crate::engine::perturbation::DEFAULT_PERTURBATION_PROBABILITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub llm_base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub request_timeout_secs: u64,

    /// Chance that any single answer token gets obfuscated.
    pub perturbation_probability: f64,

    /// Fixed seed for reproducible perturbation. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm_base_url: "http://localhost:1234".into(),
            model: "local-model".into(),
            max_tokens: 2048,
            temperature: 0.6,
            request_timeout_secs: 300,
            perturbation_probability: DEFAULT_PERTURBATION_PROBABILITY,
            seed: None,
        }
    }
}

impl Settings {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            perturbation_probability: self.perturbation_probability(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    pub fn perturbation_probability(&self) -> f64 {
        if self.perturbation_probability.is_nan() {
            return DEFAULT_PERTURBATION_PROBABILITY;
        }
        self.perturbation_probability.clamp(0.0, 1.0)
    }
}
