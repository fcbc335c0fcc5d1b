//! Builds the routing gateway from `[provider]` settings

use super::{GeminiAdapter, GenerationParams, OpenAiAdapter, ProviderAdapter, ProviderKind, RoutingGateway};
use crate::config::FileProviderConfig;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ProviderBuildError {
    #[error("Invalid provider kind: {0}")]
    InvalidKind(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Register both adapters behind one [`RoutingGateway`].
///
/// An adapter without an API key is still registered; its calls fail fast
/// and the generation client moves on.
pub fn build_gateway(config: &FileProviderConfig) -> Result<RoutingGateway, ProviderBuildError> {
    let default_kind: ProviderKind = config
        .kind
        .parse()
        .map_err(ProviderBuildError::InvalidKind)?;

    let client = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("interview-orchestrator/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let params = GenerationParams {
        temperature: config.temperature,
        max_output_tokens: config.max_output_tokens,
    };

    let gemini_key = config.gemini.resolve_api_key();
    let openai_key = config.openai.resolve_api_key();
    if gemini_key.is_none() && openai_key.is_none() {
        warn!("No provider API key configured; interview turns will use fallback output");
    }
    debug!(
        default = %default_kind,
        gemini_key = gemini_key.is_some(),
        openai_key = openai_key.is_some(),
        "Building provider gateway"
    );

    let providers: Vec<Arc<dyn ProviderAdapter>> = vec![
        Arc::new(
            GeminiAdapter::new(client.clone(), gemini_key, &config.gemini.base_url)
                .with_params(params),
        ),
        Arc::new(
            OpenAiAdapter::new(client, openai_key, &config.openai.base_url).with_params(params),
        ),
    ];

    Ok(RoutingGateway::new(providers, default_kind))
}
