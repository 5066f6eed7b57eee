// src/api/mod.rs

pub mod error;
pub mod http;
