//! LLM Gateway port
//!
//! Defines the interface for calling a remote text-generation provider.

use async_trait::async_trait;
use interview_domain::Model;
use thiserror::Error;

/// Errors that can occur during a single provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Rate limited by provider: {0}")]
    RateLimited(String),

    #[error("Provider returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Malformed provider payload: {0}")]
    MalformedPayload(String),

    #[error("Provider returned no text")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Transient failures are worth another round after backoff.
    ///
    /// The generation client retries every failure regardless; this only
    /// feeds logging.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::ConnectionError(_)
            | GatewayError::RateLimited(_)
            | GatewayError::Timeout => true,
            GatewayError::HttpStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Gateway for text generation
///
/// This port defines how the application layer talks to providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send `prompt` to `model` and return the generated text
    async fn call(&self, model: &Model, prompt: &str) -> Result<String, GatewayError>;
}
