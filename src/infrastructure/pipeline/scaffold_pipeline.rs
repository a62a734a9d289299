use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{PipelineError, PipelineFactory, RagPipeline};
use crate::domain::{Answer, PipelineConfig, TopK};

/// Pipeline that needs no backend. Ingests nothing and answers with a canned
/// payload so the API can be exercised end to end.
pub struct ScaffoldPipelineFactory {
    delay: Duration,
}

impl ScaffoldPipelineFactory {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl PipelineFactory for ScaffoldPipelineFactory {
    fn create(&self, config: PipelineConfig) -> Result<Box<dyn RagPipeline>, PipelineError> {
        Ok(Box::new(ScaffoldPipeline {
            config,
            delay: self.delay,
        }))
    }
}

pub struct ScaffoldPipeline {
    config: PipelineConfig,
    delay: Duration,
}

impl ScaffoldPipeline {
    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl RagPipeline for ScaffoldPipeline {
    async fn ingest(&self, source: &str) -> Result<usize, PipelineError> {
        self.simulate_latency().await;
        tracing::debug!(source, collection = %self.config.collection, "Scaffold ingest");
        Ok(0)
    }

    async fn ask(
        &self,
        question: &str,
        top_k: TopK,
        require_citations: bool,
    ) -> Result<Answer, PipelineError> {
        self.simulate_latency().await;
        Ok(Answer::new(json!({
            "answer": format!("Scaffold mode is enabled. You asked: \"{}\"", question),
            "citations": [],
            "collection": self.config.collection,
            "llm_model": self.config.llm_model,
            "top_k": top_k,
            "require_citations": require_citations,
        })))
    }
}
