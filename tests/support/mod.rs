// tests/support/mod.rs
// Scripted LLM provider for driving routing and chat flows in tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use sage::llm::{ChatRequest, LlmError, LlmProvider};

/// Pops one scripted result per completion call and remembers every
/// request it saw.
pub struct StubProvider {
    script: Mutex<VecDeque<Result<String, LlmError>>>,
    seen: Mutex<Vec<ChatRequest>>,
}

impl StubProvider {
    pub fn new(script: Vec<Result<String, LlmError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|reply| Ok((*reply).to_string())).collect())
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.seen.lock().expect("seen lock").clone()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        self.seen.lock().expect("seen lock").push(request.clone());
        self.script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::MalformedResponse("script exhausted".to_string())))
    }
}
