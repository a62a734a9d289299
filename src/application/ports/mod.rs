mod model_lister;
mod pipeline_factory;
mod rag_pipeline;

pub use model_lister::{ModelLister, ModelListerError};
pub use pipeline_factory::PipelineFactory;
pub use rag_pipeline::{PipelineError, RagPipeline};
