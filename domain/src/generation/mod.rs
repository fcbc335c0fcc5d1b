//! Generation attempt records
//!
//! One record per provider call, consumed by retry bookkeeping and logging.
//! Records are never persisted by the orchestrator itself.

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Outcome of a single provider call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum AttemptOutcome {
    Succeeded,
    Failed(String),
}

/// A (model, attempt round, outcome) triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationAttempt {
    pub model: Model,
    /// 1-based attempt round
    pub attempt: u32,
    pub outcome: AttemptOutcome,
}

impl GenerationAttempt {
    pub fn succeeded(model: Model, attempt: u32) -> Self {
        Self {
            model,
            attempt,
            outcome: AttemptOutcome::Succeeded,
        }
    }

    pub fn failed(model: Model, attempt: u32, error: impl Into<String>) -> Self {
        Self {
            model,
            attempt,
            outcome: AttemptOutcome::Failed(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, AttemptOutcome::Succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_serialization() {
        let attempt = GenerationAttempt::failed(Model::Gemini20Flash, 2, "HTTP 429");
        let json = serde_json::to_value(&attempt).unwrap();
        assert_eq!(json["model"], "gemini-2.0-flash");
        assert_eq!(json["attempt"], 2);
        assert_eq!(json["outcome"]["status"], "failed");
        assert_eq!(json["outcome"]["error"], "HTTP 429");
        assert!(!attempt.is_success());
        assert!(GenerationAttempt::succeeded(Model::Gpt4oMini, 1).is_success());
    }
}
