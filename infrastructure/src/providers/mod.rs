//! Text-generation provider adapters
//!
//! Each adapter speaks one provider's HTTP dialect; [`RoutingGateway`] picks
//! one per model and exposes them as a single [`LlmGateway`].
//!
//! [`LlmGateway`]: interview_application::LlmGateway

pub mod factory;
pub mod gemini;
pub mod http;
pub mod openai;
pub mod routing;

pub use factory::{ProviderBuildError, build_gateway};
pub use gemini::GeminiAdapter;
pub use openai::OpenAiAdapter;
pub use routing::RoutingGateway;

use async_trait::async_trait;
use interview_application::GatewayError;
use interview_domain::Model;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Gemini,
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "openai" => Ok(ProviderKind::OpenAi),
            other => Err(format!("unknown provider kind: {}", other)),
        }
    }
}

/// Sampling parameters shared by every adapter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationParams {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;
    async fn generate(&self, model: &Model, prompt: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("gemini".parse::<ProviderKind>(), Ok(ProviderKind::Gemini));
        assert_eq!(" OpenAI ".parse::<ProviderKind>(), Ok(ProviderKind::OpenAi));
        assert!("bedrock".parse::<ProviderKind>().is_err());
        assert_eq!(ProviderKind::OpenAi.to_string(), "openai");
    }
}
