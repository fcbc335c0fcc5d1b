//! Infrastructure layer for interview-orchestrator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod session_id;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use logging::JsonlAttemptLogger;
pub use providers::{ProviderBuildError, ProviderKind, RoutingGateway, build_gateway};
pub use session_id::UuidSessionIdGenerator;
