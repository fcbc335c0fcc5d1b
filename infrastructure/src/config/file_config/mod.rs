//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types at the
//! composition root.

mod logging;
mod models;
mod provider;
mod retry;
mod server;

pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use provider::{FileGeminiConfig, FileOpenAiConfig, FileProviderConfig};
pub use retry::FileRetryConfig;
pub use server::FileServerConfig;

use super::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Candidate model roster
    pub models: FileModelsConfig,
    /// Retry and timeout policy
    pub retry: FileRetryConfig,
    /// Text-generation provider settings
    pub provider: FileProviderConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Model roster (empty list, blank names)
    /// 2. Retry policy (zero attempts)
    /// 3. Provider selection and credentials
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.models.parse_candidates().1);
        issues.extend(self.retry.validate());
        issues.extend(self.provider.validate());
        issues
    }
}
