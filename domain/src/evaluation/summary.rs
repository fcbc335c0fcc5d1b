//! Qualitative session summary returned by the provider
//!
//! Parsing is two-stage and never fails the request: strict JSON first,
//! then the span between the first `{` and the last `}`. Anything else is
//! reported as [`ParseOutcome::Malformed`] or [`ParseOutcome::Empty`] and the
//! caller substitutes [`SummaryPayload::neutral`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const MIN_RATING: i64 = 1;
const MAX_RATING: i64 = 10;

const NEUTRAL_SUMMARY: &str = "Interview completed. A detailed written evaluation is not available \
right now; see the per-question analysis for feedback on each answer.";

/// Structured summary of a finished interview
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryPayload {
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    /// Category name → rating in `1..=10`
    pub categories: BTreeMap<String, u32>,
}

impl SummaryPayload {
    /// Fixed payload used when no usable summary could be obtained
    pub fn neutral() -> Self {
        Self {
            summary: NEUTRAL_SUMMARY.to_string(),
            ..Self::default()
        }
    }

    /// Normalize a decoded JSON object.
    ///
    /// Non-string list entries are dropped; ratings may be numbers or numeric
    /// strings and are rounded and clamped to `1..=10`.
    fn from_object(object: &Map<String, Value>) -> Self {
        let summary = object
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string();

        let categories = object
            .get("categories")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(key, value)| Some((key.clone(), normalize_rating(value)?)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            summary,
            strengths: string_list(object.get("strengths")),
            improvements: string_list(object.get("improvements")),
            categories,
        }
    }
}

/// Result of [`try_parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(SummaryPayload),
    Malformed,
    Empty,
}

impl ParseOutcome {
    /// The parsed payload, or the neutral one; the flag is `true` when neutral
    pub fn into_payload(self) -> (SummaryPayload, bool) {
        match self {
            ParseOutcome::Parsed(payload) => (payload, false),
            ParseOutcome::Malformed | ParseOutcome::Empty => (SummaryPayload::neutral(), true),
        }
    }
}

/// Parse a provider response into a [`SummaryPayload`].
///
/// # Examples
///
/// ```
/// use interview_domain::evaluation::summary::{try_parse, ParseOutcome};
///
/// let text = "Sure! Here it is:\n{\"summary\": \"Solid\", \"categories\": {\"javascript\": 8}}\nThanks";
/// let ParseOutcome::Parsed(payload) = try_parse(text) else { panic!() };
/// assert_eq!(payload.summary, "Solid");
/// assert_eq!(payload.categories["javascript"], 8);
///
/// assert_eq!(try_parse("   "), ParseOutcome::Empty);
/// assert_eq!(try_parse("no json here"), ParseOutcome::Malformed);
/// ```
pub fn try_parse(response: &str) -> ParseOutcome {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return ParseOutcome::Empty;
    }

    if let Some(object) = parse_object(trimmed) {
        return ParseOutcome::Parsed(SummaryPayload::from_object(&object));
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}'))
        && start < end
        && let Some(object) = parse_object(&trimmed[start..=end])
    {
        return ParseOutcome::Parsed(SummaryPayload::from_object(&object));
    }

    ParseOutcome::Malformed
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn normalize_rating(value: &Value) -> Option<u32> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    Some((raw.round() as i64).clamp(MIN_RATING, MAX_RATING) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_json() {
        let response = r#"{
            "summary": "Good fundamentals",
            "strengths": ["Clear explanations"],
            "improvements": ["More testing"],
            "categories": {"javascript": 7, "communication": 9}
        }"#;
        let ParseOutcome::Parsed(payload) = try_parse(response) else {
            panic!("expected parsed payload");
        };
        assert_eq!(payload.summary, "Good fundamentals");
        assert_eq!(payload.strengths, vec!["Clear explanations"]);
        assert_eq!(payload.improvements, vec!["More testing"]);
        assert_eq!(payload.categories["communication"], 9);
    }

    #[test]
    fn test_json_inside_markdown_fence() {
        let response = "```json\n{\"summary\": \"ok\", \"strengths\": []}\n```";
        let ParseOutcome::Parsed(payload) = try_parse(response) else {
            panic!("expected parsed payload");
        };
        assert_eq!(payload.summary, "ok");
    }

    #[test]
    fn test_malformed_and_empty() {
        assert_eq!(try_parse(""), ParseOutcome::Empty);
        assert_eq!(try_parse("\n\t "), ParseOutcome::Empty);
        assert_eq!(try_parse("I cannot help with that"), ParseOutcome::Malformed);
        assert_eq!(try_parse("{ broken json }"), ParseOutcome::Malformed);
        assert_eq!(try_parse("} backwards {"), ParseOutcome::Malformed);
    }

    #[test]
    fn test_non_object_json_is_malformed() {
        assert_eq!(try_parse("[1, 2, 3]"), ParseOutcome::Malformed);
        assert_eq!(try_parse("\"just a string\""), ParseOutcome::Malformed);
    }

    #[test]
    fn test_ratings_are_normalized() {
        let response = r#"{"categories": {"a": 12, "b": "7.6", "c": 0, "d": "high", "e": null}}"#;
        let ParseOutcome::Parsed(payload) = try_parse(response) else {
            panic!("expected parsed payload");
        };
        assert_eq!(payload.categories.len(), 3);
        assert_eq!(payload.categories["a"], 10);
        assert_eq!(payload.categories["b"], 8);
        assert_eq!(payload.categories["c"], 1);
    }

    #[test]
    fn test_non_string_list_entries_dropped() {
        let response = r#"{"strengths": ["ok", 3, null, "  "], "improvements": "not a list"}"#;
        let ParseOutcome::Parsed(payload) = try_parse(response) else {
            panic!("expected parsed payload");
        };
        assert_eq!(payload.strengths, vec!["ok"]);
        assert!(payload.improvements.is_empty());
        assert!(payload.summary.is_empty());
    }

    #[test]
    fn test_into_payload_flags_neutral() {
        let (payload, neutral) = ParseOutcome::Malformed.into_payload();
        assert!(neutral);
        assert_eq!(payload, SummaryPayload::neutral());
        assert!(!payload.summary.is_empty());
        assert!(payload.strengths.is_empty());
        assert!(payload.categories.is_empty());

        let (_, neutral) = ParseOutcome::Parsed(SummaryPayload::default()).into_payload();
        assert!(!neutral);
    }
}
