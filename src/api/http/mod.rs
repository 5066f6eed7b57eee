// src/api/http/mod.rs

pub mod actions;
pub mod chat;
pub mod handlers;
pub mod memory;
pub mod profile;
pub mod router;

pub use router::http_router;
