//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as provider timeouts and the retry policy.

use std::time::Duration;

/// Retry policy for the generation client.
///
/// Every round tries each candidate model once; rounds are separated by an
/// exponential, jitter-free backoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of rounds over the candidate list.
    pub max_attempts: u32,
    /// Backoff after round `n` is `base_delay * 2^(n-1)`.
    pub base_delay: Duration,
    /// Maximum time to wait for one provider call before counting it failed.
    pub call_timeout: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            call_timeout: Some(Duration::from_secs(20)),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy from raw config values.
    ///
    /// If `call_timeout_secs` is `None` or zero, no per-call timeout is applied.
    pub fn from_settings(max_attempts: u32, base_delay_ms: u64, call_timeout_secs: Option<u64>) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::from_millis(base_delay_ms),
            call_timeout: call_timeout_secs
                .filter(|s| *s > 0)
                .map(Duration::from_secs),
        }
    }

    /// Sleep between round `attempt` and the next one (1-based)
    pub fn backoff_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1 << exponent)
    }

    /// Worst-case total backoff across all rounds
    pub fn total_backoff(&self) -> Duration {
        (1..self.max_attempts.max(1))
            .map(|attempt| self.backoff_after(attempt))
            .sum()
    }
}
