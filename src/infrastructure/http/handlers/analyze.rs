//! Analyze Handlers
//!
//! 表单入口 `/analyze` 与 JSON 入口 `/api/analyze` 共用同一个命令

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    Form, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::application::AnalyzeBook;
use crate::infrastructure::http::dto::{AnalysisView, ApiResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub title: String,
}

async fn run_analysis(
    state: &AppState,
    title: String,
) -> Result<Json<ApiResponse<AnalysisView>>, ApiError> {
    let result = state
        .analyze_book_handler
        .handle(AnalyzeBook { title })
        .await?;

    Ok(Json(ApiResponse::success(AnalysisView {
        analysis: result.analysis,
        prompt: result.prompt,
        game_link: result.game_link,
    })))
}

/// 表单提交（application/x-www-form-urlencoded，字段 `title`）
pub async fn analyze_form(
    State(state): State<Arc<AppState>>,
    form: Result<Form<AnalyzeRequest>, FormRejection>,
) -> Result<Json<ApiResponse<AnalysisView>>, ApiError> {
    let Form(req) = form?;
    run_analysis(&state, req.title).await
}

/// JSON 提交
pub async fn analyze_json(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AnalysisView>>, ApiError> {
    let Json(req) = body?;
    run_analysis(&state, req.title).await
}
