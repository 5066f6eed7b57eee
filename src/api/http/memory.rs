// src/api/http/memory.rs
// Read and reset endpoints over a session's memory.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use tracing::info;

use crate::api::error::ApiResult;
use crate::state::AppState;

/// GET /api/sessions/{id}/memory/context
pub async fn get_learning_context(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let session = state.sessions.get_or_create(&id).await;
    Ok(Json(json!({ "context": session.learning_context() })))
}

/// GET /api/sessions/{id}/memory/summary
pub async fn get_interaction_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let session = state.sessions.get_or_create(&id).await;
    Ok(Json(json!({ "summary": session.interaction_summary() })))
}

/// GET /api/sessions/{id}/memory/subjects
pub async fn get_subject_statistics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let session = state.sessions.get_or_create(&id).await;
    Ok(Json(session.subject_statistics()))
}

/// DELETE /api/sessions/{id}/memory
pub async fn clear_memory(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let session = state.sessions.get_or_create(&id).await;
    session.clear_memory();

    info!(session_id = %id, "🗑️ cleared session memory");
    Ok(Json(json!({ "cleared": true })))
}
