//! Provider configuration from TOML (`[provider]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Provider kinds accepted by `[provider] kind`
pub const PROVIDER_KINDS: [&str; 2] = ["gemini", "openai"];

/// Gemini (`generateContent`) provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

impl FileGeminiConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

/// OpenAI-compatible (`chat/completions`) provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL; point it at any OpenAI-compatible server.
    pub base_url: String,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
        }
    }
}

impl FileOpenAiConfig {
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

/// Provider selection and generation parameters
///
/// # Example
///
/// ```toml
/// [provider]
/// kind = "gemini"
/// temperature = 0.7
///
/// [provider.gemini]
/// api_key_env = "GEMINI_API_KEY"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Provider used for models outside the Gemini and GPT families
    pub kind: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub gemini: FileGeminiConfig,
    pub openai: FileOpenAiConfig,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            kind: "gemini".to_string(),
            temperature: None,
            max_output_tokens: None,
            gemini: FileGeminiConfig::default(),
            openai: FileOpenAiConfig::default(),
        }
    }
}

impl FileProviderConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let missing_key = match self.kind.as_str() {
            "gemini" => (self.gemini.resolve_api_key().is_none())
                .then(|| ("gemini", self.gemini.api_key_env.as_str())),
            "openai" => (self.openai.resolve_api_key().is_none())
                .then(|| ("openai", self.openai.api_key_env.as_str())),
            other => {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "provider.kind".to_string(),
                        value: other.to_string(),
                        valid_values: PROVIDER_KINDS.iter().map(|s| s.to_string()).collect(),
                    },
                    message: format!(
                        "provider.kind: unknown provider '{}' (expected one of: {})",
                        other,
                        PROVIDER_KINDS.join(", ")
                    ),
                });
                None
            }
        };

        if let Some((provider, env_var)) = missing_key {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingApiKey {
                    provider: provider.to_string(),
                    env_var: env_var.to_string(),
                },
                message: format!(
                    "provider.{}: no API key (set {}); every turn will use fallback output",
                    provider, env_var
                ),
            });
        }

        issues
    }
}

fn resolve_key(direct: Option<&str>, env_var: &str) -> Option<String> {
    direct
        .filter(|k| !k.trim().is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var(env_var).ok().filter(|k| !k.trim().is_empty()))
}
