use async_trait::async_trait;

use crate::domain::ModelCatalog;

#[async_trait]
pub trait ModelLister: Send + Sync {
    async fn list(&self) -> Result<ModelCatalog, ModelListerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelListerError {
    #[error("model daemon unreachable: {0}")]
    Unreachable(String),
    #[error("model daemon returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("invalid model list: {0}")]
    InvalidResponse(String),
}
