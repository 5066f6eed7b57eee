// src/state.rs

use std::sync::Arc;

use crate::coach::CoachService;
use crate::llm::LlmProvider;
use crate::session::SessionRegistry;

/// Shared application state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    // -------- LLM Core --------
    pub provider: Arc<dyn LlmProvider>,

    // -------- Sessions --------
    pub sessions: Arc<SessionRegistry>,

    // -------- Services --------
    pub coach: Arc<CoachService>,
}

impl AppState {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        let coach = Arc::new(CoachService::new(provider.clone()));
        Self {
            provider,
            sessions: Arc::new(SessionRegistry::new()),
            coach,
        }
    }
}
