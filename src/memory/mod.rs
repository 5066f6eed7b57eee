// src/memory/mod.rs

pub mod store;
pub mod types;

pub use store::SessionMemory;
pub use types::{DifficultyTrend, Interaction, LearningPatterns};
