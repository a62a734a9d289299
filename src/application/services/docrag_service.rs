use std::sync::Arc;

use crate::application::ports::{PipelineError, PipelineFactory};
use crate::domain::{Answer, ModelSelection, PipelineConfig, TopK};

pub struct IngestCommand {
    pub source: String,
    pub collection: String,
    pub persist: String,
}

pub struct AskCommand {
    pub question: String,
    pub collection: String,
    pub persist: String,
    pub top_k: TopK,
    pub require_citations: bool,
}

/// Delegates ingestion and question answering to a pipeline created for the
/// call. Nothing is cached between calls.
pub struct DocragService {
    factory: Arc<dyn PipelineFactory>,
    models: ModelSelection,
}

impl DocragService {
    pub fn new(factory: Arc<dyn PipelineFactory>, models: ModelSelection) -> Self {
        Self { factory, models }
    }

    pub fn pipeline_config(&self, persist: &str, collection: &str) -> PipelineConfig {
        PipelineConfig::new(persist, collection, &self.models)
    }

    pub async fn ingest(&self, command: &IngestCommand) -> Result<usize, DocragError> {
        let config = self.pipeline_config(&command.persist, &command.collection);
        let pipeline = self
            .factory
            .create(config)
            .map_err(DocragError::Construction)?;

        let chunks = pipeline
            .ingest(&command.source)
            .await
            .map_err(DocragError::Ingestion)?;

        tracing::info!(
            chunks,
            collection = %command.collection,
            persist = %command.persist,
            "Document ingested"
        );

        Ok(chunks)
    }

    pub async fn ask(&self, command: &AskCommand) -> Result<Answer, DocragError> {
        let config = self.pipeline_config(&command.persist, &command.collection);
        let pipeline = self
            .factory
            .create(config)
            .map_err(DocragError::Construction)?;

        pipeline
            .ask(&command.question, command.top_k, command.require_citations)
            .await
            .map_err(DocragError::Answering)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocragError {
    #[error("pipeline construction: {0}")]
    Construction(PipelineError),
    #[error("ingestion: {0}")]
    Ingestion(PipelineError),
    #[error("answering: {0}")]
    Answering(PipelineError),
}
