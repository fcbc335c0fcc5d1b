//! Presentation layer for interview-orchestrator
//!
//! This crate contains the JSON/HTTP surface and the CLI definitions.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, InterviewState, router};
