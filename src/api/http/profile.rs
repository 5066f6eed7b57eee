// src/api/http/profile.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::info;

use crate::api::error::ApiResult;
use crate::profile::LearnerProfile;
use crate::state::AppState;

/// GET /api/sessions/{id}/profile
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let session = state.sessions.get_or_create(&id).await;
    Ok(Json(session.profile()))
}

/// PUT /api/sessions/{id}/profile
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(profile): Json<LearnerProfile>,
) -> ApiResult<impl IntoResponse> {
    info!(
        session_id = %id,
        subjects = profile.preferred_subjects.len(),
        level = %profile.learning_level,
        "📊 updating learner profile"
    );
    let session = state.sessions.get_or_create(&id).await;
    session.set_profile(profile.clone());

    Ok(Json(profile))
}
