use serde::Serialize;

use super::model_selection::ModelSelection;

pub const DEFAULT_COLLECTION: &str = "demo";
pub const DEFAULT_PERSIST_PATH: &str = "./.chroma";

/// Settings handed to a single pipeline instance.
///
/// Built fresh for every request and never shared, so two requests naming
/// different collections cannot observe each other's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineConfig {
    pub persist_path: String,
    pub collection: String,
    pub embed_model: String,
    pub llm_model: String,
}

impl PipelineConfig {
    pub fn new(
        persist_path: impl Into<String>,
        collection: impl Into<String>,
        models: &ModelSelection,
    ) -> Self {
        Self {
            persist_path: persist_path.into(),
            collection: collection.into(),
            embed_model: models.embed_model.clone(),
            llm_model: models.llm_model.clone(),
        }
    }
}
