//! Gemini `generateContent` adapter

use super::http::send_json;
use super::{GenerationParams, ProviderAdapter, ProviderKind};
use async_trait::async_trait;
use interview_application::GatewayError;
use interview_domain::Model;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

pub struct GeminiAdapter {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    params: GenerationParams,
}

impl GeminiAdapter {
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

    fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }

    fn request_body(&self, prompt: &str) -> Value {
        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
        });

        let mut generation_config = serde_json::Map::new();
        if let Some(temperature) = self.params.temperature {
            generation_config.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(max_tokens) = self.params.max_output_tokens {
            generation_config.insert("maxOutputTokens".to_string(), json!(max_tokens));
        }
        if !generation_config.is_empty() {
            body["generationConfig"] = Value::Object(generation_config);
        }
        body
    }
}

/// Concatenate the text parts of the first candidate
pub fn extract_text(raw: &Value) -> Result<String, GatewayError> {
    let parts = raw["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| {
            let reason = raw["promptFeedback"]["blockReason"]
                .as_str()
                .map(|r| format!("prompt blocked: {}", r))
                .unwrap_or_else(|| "no candidates in Gemini response".to_string());
            GatewayError::MalformedPayload(reason)
        })?;

    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    if text.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }
    Ok(text)
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn generate(&self, model: &Model, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GatewayError::Other("Gemini API key not configured".to_string()))?;

        debug!(model = %model, prompt_chars = prompt.len(), "Gemini generateContent");

        let request = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&self.request_body(prompt));

        let raw = send_json(request).await?;
        extract_text(&raw)
    }
}
