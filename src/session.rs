// src/session.rs
// Per-session state: one memory instance and one profile per session
// identity, each isolated behind its own lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::annotate::Subject;
use crate::memory::SessionMemory;
use crate::profile::LearnerProfile;

/// State owned by one session identity.
#[derive(Debug, Default)]
pub struct Session {
    memory: Mutex<SessionMemory>,
    profile: Mutex<LearnerProfile>,
}

impl Session {
    /// Records a completed turn. A poisoned lock is logged and the turn
    /// dropped; recording never propagates a failure to the chat flow.
    pub fn record(&self, user_query: &str, ai_response: &str) {
        match self.memory.lock() {
            Ok(mut memory) => memory.record(user_query, ai_response),
            Err(e) => warn!("interaction not recorded, memory lock poisoned: {e}"),
        }
    }

    pub fn learning_context(&self) -> String {
        match self.memory.lock() {
            Ok(memory) => memory.learning_context(),
            Err(e) => {
                warn!("memory lock poisoned: {e}");
                "Unable to retrieve learning context.".to_string()
            }
        }
    }

    pub fn interaction_summary(&self) -> String {
        match self.memory.lock() {
            Ok(memory) => memory.interaction_summary(),
            Err(e) => {
                warn!("memory lock poisoned: {e}");
                "Unable to generate interaction summary.".to_string()
            }
        }
    }

    pub fn subject_statistics(&self) -> HashMap<Subject, usize> {
        match self.memory.lock() {
            Ok(memory) => memory.subject_statistics(),
            Err(e) => {
                warn!("memory lock poisoned: {e}");
                HashMap::new()
            }
        }
    }

    pub fn interaction_count(&self) -> usize {
        self.memory.lock().map(|memory| memory.len()).unwrap_or(0)
    }

    /// Resets memory to its initial state. The reset replaces whatever a
    /// panicking writer left behind, so a poisoned lock is recoverable.
    pub fn clear_memory(&self) {
        let mut memory = self.memory.lock().unwrap_or_else(PoisonError::into_inner);
        memory.clear();
    }

    pub fn profile(&self) -> LearnerProfile {
        match self.profile.lock() {
            Ok(profile) => profile.clone(),
            Err(e) => {
                warn!("profile lock poisoned: {e}");
                LearnerProfile::default()
            }
        }
    }

    pub fn set_profile(&self, profile: LearnerProfile) {
        let mut current = self.profile.lock().unwrap_or_else(PoisonError::into_inner);
        *current = profile;
    }
}

/// Registry of active sessions keyed by opaque id.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Arc<Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for `id`, creating it on first use.
    pub async fn get_or_create(&self, id: &str) -> Arc<Session> {
        if let Some(session) = self.sessions.read().await.get(id) {
            return session.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(id.to_string())
            .or_insert_with(|| {
                info!("🆕 created session {id}");
                Arc::new(Session::default())
            })
            .clone()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Generates a new random session ID (UUID v4)
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}
