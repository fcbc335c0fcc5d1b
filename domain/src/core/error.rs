//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Provider trouble is not a domain error: it downgrades to fallback output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request's `action` is missing or not one of `start`, `respond`, `end`
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_action_display() {
        let error = DomainError::InvalidAction("pause".to_string());
        assert_eq!(error.to_string(), "Invalid action: pause");
    }
}
