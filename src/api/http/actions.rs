// src/api/http/actions.rs
// On-demand generation actions. None of these record into session memory.

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;

use super::chat::ReplyBody;
use crate::api::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ActionPayload {
    pub session_id: String,
}

/// POST /api/actions/study-plan
pub async fn study_plan_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ActionPayload>,
) -> ApiResult<impl IntoResponse> {
    let session = state.sessions.get_or_create(&payload.session_id).await;
    let reply = state.coach.study_plan(&session).await?;
    Ok(Json(ReplyBody { reply }))
}

/// POST /api/actions/quiz
pub async fn quiz_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ActionPayload>,
) -> ApiResult<impl IntoResponse> {
    let session = state.sessions.get_or_create(&payload.session_id).await;
    let reply = state.coach.quiz(&session).await?;
    Ok(Json(ReplyBody { reply }))
}

/// POST /api/actions/progress-report
pub async fn progress_report_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ActionPayload>,
) -> ApiResult<impl IntoResponse> {
    let session = state.sessions.get_or_create(&payload.session_id).await;
    let reply = state.coach.progress_report(&session).await;
    Ok(Json(ReplyBody { reply }))
}

/// POST /api/actions/study-techniques
pub async fn study_techniques_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ActionPayload>,
) -> ApiResult<impl IntoResponse> {
    let session = state.sessions.get_or_create(&payload.session_id).await;
    let reply = state.coach.study_techniques(&session).await;
    Ok(Json(ReplyBody { reply }))
}
