use async_trait::async_trait;
use reqwest::Client;

use super::OllamaHost;
use crate::application::ports::{ModelLister, ModelListerError};
use crate::domain::ModelCatalog;

/// Lists locally installed models through Ollama's `/api/tags`.
pub struct OllamaModelLister {
    client: Client,
    host: OllamaHost,
}

impl OllamaModelLister {
    pub fn new(host: OllamaHost) -> Self {
        Self::with_client(Client::new(), host)
    }

    pub fn with_client(client: Client, host: OllamaHost) -> Self {
        Self { client, host }
    }
}

#[async_trait]
impl ModelLister for OllamaModelLister {
    async fn list(&self) -> Result<ModelCatalog, ModelListerError> {
        let url = format!("{}/api/tags", self.host.base_url());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ModelListerError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelListerError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ModelCatalog>()
            .await
            .map_err(|e| ModelListerError::InvalidResponse(e.to_string()))
    }
}
