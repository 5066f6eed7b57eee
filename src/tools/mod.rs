// src/tools/mod.rs

pub mod prompts;
pub mod registry;
pub mod router;

pub use registry::Specialist;
pub use router::ToolRouter;
