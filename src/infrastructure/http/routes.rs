//! HTTP Routes
//!
//! API Endpoints:
//! - /analyze                POST  表单提交书名，返回分析结果视图
//! - /api/ping               GET   健康检查
//! - /api/analyze            POST  JSON 提交书名
//! - /api/dialogue/clean     POST  截断 NPC 对话
//! - /api/event/translate    POST  事件名 → 游戏动作
//! - /api/log                POST  追加一条 AI 输出日志

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", post(handlers::analyze_form))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/analyze", post(handlers::analyze_json))
        .route("/dialogue/clean", post(handlers::clean_dialogue))
        .route("/event/translate", post(handlers::translate_events))
        .route("/log", post(handlers::record_ai_output))
}
