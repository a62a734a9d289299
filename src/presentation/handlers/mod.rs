mod ask;
mod error;
mod health;
mod ingest;
mod models;
mod openapi;

pub use ask::{AskRequest, AskResponse, ask_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::{HealthResponse, SERVICE_NAME, health_handler};
pub use ingest::{IngestRequest, IngestResponse, ingest_handler};
pub use models::{ModelsResponse, models_handler};
pub use openapi::{API_TITLE, API_VERSION, openapi_document, openapi_handler};
