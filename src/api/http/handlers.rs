// src/api/http/handlers.rs
// Health and session lifecycle handlers.

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::session::generate_session_id;
use crate::state::AppState;

/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "provider": state.provider.name(),
        "sessions": state.sessions.count().await,
    }))
}

/// POST /api/sessions
pub async fn create_session_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session_id = generate_session_id();
    state.sessions.get_or_create(&session_id).await;

    Json(json!({ "session_id": session_id }))
}
