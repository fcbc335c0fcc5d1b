use super::{ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use interview_application::{GatewayError, LlmGateway};
use interview_domain::Model;
use std::sync::Arc;

/// Dispatches each call to the adapter that serves the model's family.
pub struct RoutingGateway {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    default_kind: ProviderKind,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, default_kind: ProviderKind) -> Self {
        Self {
            providers,
            default_kind,
        }
    }

    /// Routing priority:
    ///  1. model family (`gemini-*` → Gemini, `gpt-*` → OpenAI) if that adapter is registered
    ///  2. the configured default kind
    ///  3. the first registered adapter
    ///  4. `ModelNotAvailable` when nothing is registered
    fn resolve_provider(&self, model: &Model) -> Result<&dyn ProviderAdapter, GatewayError> {
        let inferred_kind = if model.is_gemini() {
            Some(ProviderKind::Gemini)
        } else if model.is_gpt() {
            Some(ProviderKind::OpenAi)
        } else {
            None
        };

        for kind in inferred_kind.into_iter().chain([self.default_kind]) {
            if let Some(p) = self.providers.iter().find(|p| p.kind() == kind) {
                return Ok(p.as_ref());
            }
        }

        self.providers
            .first()
            .map(|p| p.as_ref())
            .ok_or_else(|| GatewayError::ModelNotAvailable(format!("no provider for {}", model)))
    }
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    async fn call(&self, model: &Model, prompt: &str) -> Result<String, GatewayError> {
        self.resolve_provider(model)?.generate(model, prompt).await
    }
}
