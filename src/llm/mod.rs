// src/llm/mod.rs

pub mod client;
pub mod error;
pub mod provider;

pub use client::OpenAiClient;
pub use error::LlmError;
pub use provider::{ChatMessage, ChatRequest, LlmProvider};
