// src/llm/error.rs

use thiserror::Error;

/// Failure taxonomy for chat completion calls.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API quota exhausted: {0}")]
    QuotaExceeded(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
