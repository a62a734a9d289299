mod answer;
mod model_catalog;
mod model_selection;
mod pipeline_config;
mod top_k;

pub use answer::Answer;
pub use model_catalog::{ModelCatalog, ModelEntry};
pub use model_selection::{DEFAULT_EMBED_MODEL, DEFAULT_LLM_MODEL, ModelSelection};
pub use pipeline_config::{DEFAULT_COLLECTION, DEFAULT_PERSIST_PATH, PipelineConfig};
pub use top_k::{TopK, TopKError};
