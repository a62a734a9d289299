use serde::{Deserialize, Serialize};

pub const DEFAULT_LLM_MODEL: &str = "llama3.2:1b";
pub const DEFAULT_EMBED_MODEL: &str = "nomic-embed-text";

/// Models the external pipeline is told to use, fixed at process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSelection {
    pub llm_model: String,
    pub embed_model: String,
}

impl ModelSelection {
    pub fn new(llm_model: impl Into<String>, embed_model: impl Into<String>) -> Self {
        Self {
            llm_model: llm_model.into(),
            embed_model: embed_model.into(),
        }
    }
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self::new(DEFAULT_LLM_MODEL, DEFAULT_EMBED_MODEL)
    }
}
