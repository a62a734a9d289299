use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{PipelineError, PipelineFactory, RagPipeline};
use crate::domain::{Answer, PipelineConfig, TopK};

/// Creates [`HttpRagPipeline`]s against a docrag pipeline service.
///
/// The HTTP client (and its connection pool) is shared; the settings each
/// pipeline carries are not.
pub struct HttpPipelineFactory {
    client: Client,
    base_url: String,
}

impl HttpPipelineFactory {
    pub fn new(base_url: &str) -> Result<Self, PipelineError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, PipelineError> {
        Url::parse(base_url).map_err(|e| {
            PipelineError::Construction(format!("invalid pipeline url {}: {}", base_url, e))
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl PipelineFactory for HttpPipelineFactory {
    fn create(&self, config: PipelineConfig) -> Result<Box<dyn RagPipeline>, PipelineError> {
        Ok(Box::new(HttpRagPipeline {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            config,
        }))
    }
}

pub struct HttpRagPipeline {
    client: Client,
    base_url: String,
    config: PipelineConfig,
}

#[derive(Serialize)]
struct IngestRequest<'a> {
    settings: &'a PipelineConfig,
    source: &'a str,
}

#[derive(Deserialize)]
struct IngestResponse {
    chunks: usize,
}

#[derive(Serialize)]
struct AskRequest<'a> {
    settings: &'a PipelineConfig,
    question: &'a str,
    top_k: TopK,
    require_citations: bool,
}

impl HttpRagPipeline {
    async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, PipelineError> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| PipelineError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl RagPipeline for HttpRagPipeline {
    async fn ingest(&self, source: &str) -> Result<usize, PipelineError> {
        let request = IngestRequest {
            settings: &self.config,
            source,
        };

        let response: IngestResponse = self
            .post("ingest", &request)
            .await?
            .json()
            .await
            .map_err(|e| PipelineError::InvalidResponse(e.to_string()))?;

        Ok(response.chunks)
    }

    async fn ask(
        &self,
        question: &str,
        top_k: TopK,
        require_citations: bool,
    ) -> Result<Answer, PipelineError> {
        let request = AskRequest {
            settings: &self.config,
            question,
            top_k,
            require_citations,
        };

        let answer: Value = self
            .post("ask", &request)
            .await?
            .json()
            .await
            .map_err(|e| PipelineError::InvalidResponse(e.to_string()))?;

        Ok(Answer::new(answer))
    }
}
