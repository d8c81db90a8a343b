//! AI Output Log Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::application::RecordAiOutput;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecordAiOutputRequest {
    #[serde(default)]
    pub label: Option<String>,
    pub payload: Value,
}

#[derive(Debug, Serialize)]
pub struct RecordAiOutputResponse {
    pub path: String,
}

pub async fn record_ai_output(
    State(state): State<Arc<AppState>>,
    body: Result<Json<RecordAiOutputRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<RecordAiOutputResponse>>, ApiError> {
    let Json(req) = body?;

    let handler = state
        .record_ai_output_handler
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("AI output log is disabled".to_string()))?;

    let path = handler
        .handle(RecordAiOutput {
            label: req.label,
            payload: req.payload,
        })
        .await?;

    Ok(Json(ApiResponse::success(RecordAiOutputResponse {
        path: path.display().to_string(),
    })))
}
