// src/lib.rs

pub mod annotate;
pub mod api;
pub mod coach;
pub mod config;
pub mod llm;
pub mod memory;
pub mod profile;
pub mod session;
pub mod state;
pub mod tools;
