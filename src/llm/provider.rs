// src/llm/provider.rs
// Chat completion capability consumed by routing and generation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::LlmError;

/// Message format for chat completion requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// One chat completion exchange.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
    pub json_mode: bool,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens,
            temperature: None,
            json_mode: false,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Requests a JSON object response from the model.
    pub fn json_object(mut self) -> Self {
        self.json_mode = true;
        self
    }
}

/// Provider interface for single-turn chat completions.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging and health reporting.
    fn name(&self) -> &'static str;

    /// Runs one chat completion and returns the generated text.
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError>;
}
