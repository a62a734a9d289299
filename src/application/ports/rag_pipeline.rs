use async_trait::async_trait;

use crate::domain::{Answer, TopK};

/// A RAG pipeline bound to one collection and persistence path.
#[async_trait]
pub trait RagPipeline: Send + Sync {
    /// Ingests the document at `source` and returns the number of chunks stored.
    async fn ingest(&self, source: &str) -> Result<usize, PipelineError>;

    async fn ask(
        &self,
        question: &str,
        top_k: TopK,
        require_citations: bool,
    ) -> Result<Answer, PipelineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("pipeline unreachable: {0}")]
    Unreachable(String),
    #[error("pipeline returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("invalid pipeline response: {0}")]
    InvalidResponse(String),
    #[error("pipeline construction failed: {0}")]
    Construction(String),
}
