//! OpenAI-compatible `chat/completions` adapter

use super::http::send_json;
use super::{GenerationParams, ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use interview_application::GatewayError;
use interview_domain::Model;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

pub struct OpenAiAdapter {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    params: GenerationParams,
}

impl OpenAiAdapter {
    pub fn new(client: Client, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    fn request_body(&self, model: &Model, prompt: &str) -> Value {
        let mut body = json!({
            "model": model.as_str(),
            "messages": [{ "role": "user", "content": prompt }],
        });
        if let Some(temperature) = self.params.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = self.params.max_output_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        body
    }
}

/// Text of the first choice
pub fn extract_text(raw: &Value) -> Result<String, GatewayError> {
    let message = &raw["choices"][0]["message"];
    if message.is_null() {
        return Err(GatewayError::MalformedPayload(
            "no choices in chat completion".to_string(),
        ));
    }
    match message["content"].as_str() {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(GatewayError::EmptyResponse),
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn generate(&self, model: &Model, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GatewayError::Other("OpenAI API key not configured".to_string()))?;

        debug!(model = %model, prompt_chars = prompt.len(), "OpenAI chat completion");

        let request = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&self.request_body(model, prompt));

        let raw = send_json(request).await?;
        extract_text(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let adapter = OpenAiAdapter::new(Client::new(), None, "http://localhost:11434")
            .with_params(GenerationParams {
                temperature: None,
                max_output_tokens: Some(128),
            });
        let body = adapter.request_body(&Model::Gpt4oMini, "Ask me something");
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["content"], "Ask me something");
        assert_eq!(body["max_tokens"], 128);
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn test_extract_text() {
        let raw = json!({ "choices": [{ "message": { "role": "assistant", "content": "Why?" } }] });
        assert_eq!(extract_text(&raw).unwrap(), "Why?");

        assert!(matches!(
            extract_text(&json!({ "error": "x" })),
            Err(GatewayError::MalformedPayload(_))
        ));
        assert_eq!(
            extract_text(&json!({ "choices": [{ "message": { "content": null } }] })),
            Err(GatewayError::EmptyResponse)
        );
    }
}
