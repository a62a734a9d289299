mod http_pipeline;
mod pipeline_factory;
mod scaffold_pipeline;

pub use http_pipeline::{HttpPipelineFactory, HttpRagPipeline};
pub use pipeline_factory::create_pipeline_factory;
pub use scaffold_pipeline::{ScaffoldPipeline, ScaffoldPipelineFactory};
