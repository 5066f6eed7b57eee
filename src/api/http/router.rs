// src/api/http/router.rs
// HTTP router composition for the REST surface.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::actions::{
    progress_report_handler, quiz_handler, study_plan_handler, study_techniques_handler,
};
use super::chat::chat_handler;
use super::handlers::{create_session_handler, health_handler};
use super::memory::{clear_memory, get_interaction_summary, get_learning_context, get_subject_statistics};
use super::profile::{get_profile, update_profile};
use crate::config::CONFIG;
use crate::state::AppState;

pub fn http_router(app_state: Arc<AppState>) -> Router {
    let api = Router::new()
        // Chat
        .route("/chat", post(chat_handler))
        // On-demand generation actions
        .route("/actions/study-plan", post(study_plan_handler))
        .route("/actions/quiz", post(quiz_handler))
        .route("/actions/progress-report", post(progress_report_handler))
        .route("/actions/study-techniques", post(study_techniques_handler))
        // Sessions
        .route("/sessions", post(create_session_handler))
        .route("/sessions/{id}/profile", get(get_profile).put(update_profile))
        .route("/sessions/{id}/memory", delete(clear_memory))
        .route("/sessions/{id}/memory/context", get(get_learning_context))
        .route("/sessions/{id}/memory/summary", get(get_interaction_summary))
        .route("/sessions/{id}/memory/subjects", get(get_subject_statistics));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(CONFIG.request_timeout)))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
