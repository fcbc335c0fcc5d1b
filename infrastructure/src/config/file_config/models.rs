//! Candidate model configuration from TOML (`[models]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
use interview_domain::Model;
use serde::{Deserialize, Serialize};

/// Ordered model roster
///
/// # Example
///
/// ```toml
/// [models]
/// candidates = ["gemini-2.0-flash", "gemini-1.5-flash"]   # tried in this order
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub candidates: Vec<String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            candidates: Model::default_candidates()
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl FileModelsConfig {
    /// Parse the roster, collecting issues for blank names and an empty list.
    ///
    /// Blank entries are skipped; unknown names become `Model::Custom`.
    pub fn parse_candidates(&self) -> (Vec<Model>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut models = Vec::new();

        for (index, name) in self.candidates.iter().enumerate() {
            let name = name.trim();
            if name.is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::EmptyModelName { index },
                    message: format!("models.candidates[{}]: model name cannot be empty", index),
                });
                continue;
            }
            let Ok(model) = name.parse::<Model>();
            models.push(model);
        }

        if models.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::NoCandidateModels,
                message: "models.candidates: at least one model is required".to_string(),
            });
        }

        (models, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates_parse() {
        let (models, issues) = FileModelsConfig::default().parse_candidates();
        assert_eq!(models, Model::default_candidates());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_blank_names_are_skipped() {
        let config = FileModelsConfig {
            candidates: vec!["gpt-4o-mini".to_string(), "  ".to_string()],
        };
        let (models, issues) = config.parse_candidates();
        assert_eq!(models, vec![Model::Gpt4oMini]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::EmptyModelName { index: 1 });
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_empty_roster_is_error() {
        let config = FileModelsConfig { candidates: vec![] };
        let (models, issues) = config.parse_candidates();
        assert!(models.is_empty());
        assert!(issues.iter().any(|i| i.is_error()));
    }
}
