// src/api/http/chat.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatPayload {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ReplyBody {
    pub reply: String,
}

/// POST /api/chat
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatPayload>,
) -> ApiResult<impl IntoResponse> {
    if payload.message.trim().is_empty() {
        return Err(ApiError::bad_request("message must not be empty"));
    }

    let session = state.sessions.get_or_create(&payload.session_id).await;

    info!(session_id = %payload.session_id, "💬 processing learning query");
    let reply = state.coach.process_query(&session, &payload.message).await;
    state.coach.record_turn(&session, &payload.message, &reply);

    Ok(Json(ReplyBody { reply }))
}
