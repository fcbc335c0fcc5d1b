//! Model value object representing a text-generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known text-generation models (Value Object)
///
/// The orchestrator never hardcodes which of these it uses: the ordered
/// candidate list is injected through configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Gemini models
    Gemini25Flash,
    Gemini20Flash,
    Gemini15Flash,
    Gemini15Pro,
    // GPT models
    Gpt41Mini,
    Gpt4oMini,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Custom(s) => s,
        }
    }

    /// Default candidate roster, tried in order
    pub fn default_candidates() -> Vec<Model> {
        vec![Model::Gemini20Flash, Model::Gemini15Flash]
    }

    /// Check if this is a Gemini model
    pub fn is_gemini(&self) -> bool {
        match self {
            Model::Gemini25Flash
            | Model::Gemini20Flash
            | Model::Gemini15Flash
            | Model::Gemini15Pro => true,
            Model::Custom(s) => s.starts_with("gemini-"),
            _ => false,
        }
    }

    /// Check if this is a GPT model
    pub fn is_gpt(&self) -> bool {
        match self {
            Model::Gpt41Mini | Model::Gpt4oMini => true,
            Model::Custom(s) => s.starts_with("gpt-"),
            _ => false,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Gemini20Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-4o-mini" => Model::Gpt4oMini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
