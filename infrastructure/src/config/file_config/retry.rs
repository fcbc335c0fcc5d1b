//! Retry policy configuration from TOML (`[retry]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
use interview_application::RetryPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Rounds over the candidate list (default: 3)
    pub max_attempts: u32,
    /// Base of the exponential backoff in milliseconds (default: 500)
    pub base_delay_ms: u64,
    /// Per-call timeout in seconds; 0 disables it (default: 20)
    pub call_timeout_secs: Option<u64>,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 500,
            call_timeout_secs: Some(20),
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::from_settings(self.max_attempts, self.base_delay_ms, self.call_timeout_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_attempts == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ZeroAttempts,
                message: "retry.max_attempts is 0; one round will still be attempted".to_string(),
            });
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_matches_policy_default() {
        assert_eq!(FileRetryConfig::default().to_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_to_policy() {
        let config = FileRetryConfig {
            max_attempts: 2,
            base_delay_ms: 100,
            call_timeout_secs: None,
        };
        let policy = config.to_policy();
        assert_eq!(policy.max_attempts, 2);
        assert_eq!(policy.base_delay, Duration::from_millis(100));
        assert!(policy.call_timeout.is_none());
    }
}
