//! Configuration file loading for interview-orchestrator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `INTERVIEW_*` environment variables (nested keys split on `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./interview.toml` or `./.interview.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/interview-orchestrator/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileConfig, FileGeminiConfig, FileLoggingConfig, FileModelsConfig, FileOpenAiConfig,
    FileProviderConfig, FileRetryConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
