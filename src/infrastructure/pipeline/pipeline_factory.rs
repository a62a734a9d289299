use std::sync::Arc;
use std::time::Duration;

use super::{HttpPipelineFactory, ScaffoldPipelineFactory};
use crate::application::ports::{PipelineError, PipelineFactory};
use crate::presentation::config::Settings;

/// Selects the pipeline backend for the process.
pub fn create_pipeline_factory(
    settings: &Settings,
) -> Result<Arc<dyn PipelineFactory>, PipelineError> {
    if settings.scaffold.enabled {
        tracing::warn!(
            delay_ms = settings.scaffold.mock_response_delay_ms,
            "Scaffold mode enabled, pipeline calls return canned responses"
        );
        return Ok(Arc::new(ScaffoldPipelineFactory::new(Duration::from_millis(
            settings.scaffold.mock_response_delay_ms,
        ))));
    }

    let factory = HttpPipelineFactory::new(&settings.pipeline.url)?;
    tracing::info!(url = %factory.base_url(), "Using docrag pipeline service");
    Ok(Arc::new(factory))
}
