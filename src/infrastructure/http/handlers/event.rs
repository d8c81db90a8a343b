//! Event Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::TranslateEvents;
use crate::domain::GameAction;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateEventsRequest {
    pub events: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EventActionDto {
    pub event: String,
    pub action: GameAction,
}

#[derive(Debug, Serialize)]
pub struct TranslateEventsResponse {
    pub actions: Vec<EventActionDto>,
}

pub async fn translate_events(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TranslateEventsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<TranslateEventsResponse>>, ApiError> {
    let Json(req) = body?;

    let translated = state
        .translate_events_handler
        .handle(TranslateEvents { events: req.events });

    Ok(Json(ApiResponse::success(TranslateEventsResponse {
        actions: translated
            .into_iter()
            .map(|t| EventActionDto {
                event: t.event,
                action: t.action,
            })
            .collect(),
    })))
}
