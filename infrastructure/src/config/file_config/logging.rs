//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Default log filter when `RUST_LOG` is unset and no `-v` is given
    pub level: Option<String>,
    /// Also write logs to this file
    pub file: Option<PathBuf>,
    /// JSONL file receiving one record per provider call
    pub attempt_log: Option<PathBuf>,
}
