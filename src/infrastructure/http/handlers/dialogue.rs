//! Dialogue Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::CleanDialogue;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CleanDialogueRequest {
    pub lines: Vec<String>,
    #[serde(default)]
    pub max_len: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CleanDialogueResponse {
    pub lines: Vec<String>,
}

pub async fn clean_dialogue(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CleanDialogueRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CleanDialogueResponse>>, ApiError> {
    let Json(req) = body?;

    let lines = state.clean_dialogue_handler.handle(CleanDialogue {
        lines: req.lines,
        max_len: req.max_len,
    });

    Ok(Json(ApiResponse::success(CleanDialogueResponse { lines })))
}
