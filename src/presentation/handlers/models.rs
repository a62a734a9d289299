use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ModelsResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub models: Vec<String>,
}

/// Lists models known to the model daemon.
///
/// Failures are reported with `ok: false` and a 200 status, so callers must
/// inspect the body rather than the status code.
#[tracing::instrument(skip(state))]
pub async fn models_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = match state.model_lister.list().await {
        Ok(catalog) => {
            let models = catalog.names();
            tracing::debug!(count = models.len(), "Listed models");
            ModelsResponse {
                ok: true,
                error: None,
                models,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Model listing failed");
            ModelsResponse {
                ok: false,
                error: Some(e.to_string()),
                models: Vec::new(),
            }
        }
    };

    (StatusCode::OK, Json(body))
}
