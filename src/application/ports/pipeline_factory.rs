use super::{PipelineError, RagPipeline};
use crate::domain::PipelineConfig;

/// Builds a new pipeline for every call. Implementations must not hand out
/// pipelines that share per-collection state.
pub trait PipelineFactory: Send + Sync {
    fn create(&self, config: PipelineConfig) -> Result<Box<dyn RagPipeline>, PipelineError>;
}
