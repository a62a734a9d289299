use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::application::services::IngestCommand;
use crate::domain::{DEFAULT_COLLECTION, DEFAULT_PERSIST_PATH};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub uri_or_path: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_persist")]
    pub persist: String,
}

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub ok: bool,
    pub chunks: usize,
    pub collection: String,
    pub persist: String,
}

pub(super) fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

pub(super) fn default_persist() -> String {
    DEFAULT_PERSIST_PATH.to_string()
}

#[tracing::instrument(skip(state, payload))]
pub async fn ingest_handler(
    State(state): State<AppState>,
    payload: Result<Json<IngestRequest>, JsonRejection>,
) -> Result<Json<IngestResponse>, ApiError> {
    let Json(request) = payload?;

    tracing::debug!(
        source = %sanitize_prompt(&request.uri_or_path),
        collection = %request.collection,
        persist = %request.persist,
        "Processing ingest"
    );

    let command = IngestCommand {
        source: request.uri_or_path,
        collection: request.collection,
        persist: request.persist,
    };

    let chunks = state.docrag_service.ingest(&command).await?;

    Ok(Json(IngestResponse {
        ok: true,
        chunks,
        collection: command.collection,
        persist: command.persist,
    }))
}
