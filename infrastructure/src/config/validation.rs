//! Configuration validation issues.
//!
//! Validation never aborts on the first problem: every issue is collected and
//! the caller decides what to do with warnings and errors.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name in `[models]` is blank.
    EmptyModelName { index: usize },
    /// `[models] candidates` is empty.
    NoCandidateModels,
    /// `[retry] max_attempts` is zero.
    ZeroAttempts,
    /// An enum-like string field has an unsupported value.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// The selected provider has no API key.
    MissingApiKey { provider: String, env_var: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
