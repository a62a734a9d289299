use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::ApiError;
use super::ingest::{default_collection, default_persist};
use crate::application::services::AskCommand;
use crate::domain::{Answer, TopK};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_persist")]
    pub persist: String,
    #[serde(default = "default_top_k", deserialize_with = "whole_number")]
    pub top_k: i64,
    #[serde(default)]
    pub require_citations: bool,
}

fn default_top_k() -> i64 {
    i64::from(TopK::DEFAULT)
}

/// Accepts integers and integral floats (`5.0`); fractional values are a
/// data error. Values beyond `i64` saturate and fail the range check later.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    if number.is_u64() {
        return Ok(i64::MAX);
    }
    match number.as_f64() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(D::Error::custom(format!(
            "top_k must be an integer, got {}",
            number
        ))),
    }
}

impl AskRequest {
    /// Checks field bounds and turns the body into a service command.
    pub fn into_command(self) -> Result<AskCommand, ApiError> {
        let top_k = TopK::new(self.top_k)?;
        Ok(AskCommand {
            question: self.question,
            collection: self.collection,
            persist: self.persist,
            top_k,
            require_citations: self.require_citations,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub ok: bool,
    pub answer: Answer,
}

#[tracing::instrument(skip(state, payload))]
pub async fn ask_handler(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(request) = payload?;
    let command = request.into_command()?;

    tracing::debug!(
        question = %sanitize_prompt(&command.question),
        collection = %command.collection,
        top_k = %command.top_k,
        require_citations = command.require_citations,
        "Processing question"
    );

    let answer = state.docrag_service.ask(&command).await?;

    Ok(Json(AskResponse { ok: true, answer }))
}
