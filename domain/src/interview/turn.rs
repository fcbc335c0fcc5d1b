//! Interview turns
//!
//! A turn is one request/response cycle. The caller supplies all history it
//! needs, so each [`Turn`] is computable on its own.

use crate::core::error::DomainError;
use crate::core::string::non_blank;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Difficulty level used when the caller does not supply one
pub const DEFAULT_LEVEL: &str = "intermediate";

/// The `action` discriminator of a turn request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Respond,
    End,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Respond => "respond",
            Action::End => "end",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = DomainError;

    /// Action names are matched exactly; anything else is an invalid action.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Action::Start),
            "respond" => Ok(Action::Respond),
            "end" => Ok(Action::End),
            other => Err(DomainError::InvalidAction(other.to_string())),
        }
    }
}

/// Opening turn: produce the first question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartAction {
    pub level: String,
    pub focus: Option<String>,
}

impl StartAction {
    pub fn new(level: Option<&str>, focus: Option<&str>) -> Self {
        Self {
            level: non_blank(level).unwrap_or(DEFAULT_LEVEL).to_string(),
            focus: non_blank(focus).map(str::to_string),
        }
    }

    pub fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }
}

/// Follow-up turn: produce the next question from the previous exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondAction {
    pub previous_question: String,
    pub answer: String,
    pub level: String,
    pub focus: Option<String>,
}

impl RespondAction {
    pub fn new(
        previous_question: impl Into<String>,
        answer: impl Into<String>,
        level: Option<&str>,
        focus: Option<&str>,
    ) -> Self {
        Self {
            previous_question: previous_question.into(),
            answer: answer.into(),
            level: non_blank(level).unwrap_or(DEFAULT_LEVEL).to_string(),
            focus: non_blank(focus).map(str::to_string),
        }
    }

    pub fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }
}

/// One asked question and the candidate's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Whether the candidate said anything at all
    pub fn is_answered(&self) -> bool {
        !self.answer.trim().is_empty()
    }
}

/// Closing turn: evaluate the whole session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EndAction {
    /// Pairs whose `question` is a string, in caller order
    pub qa_pairs: Vec<QaPair>,
    /// Number of entries the caller offered, valid or not
    pub offered: usize,
}

impl EndAction {
    /// Build from already-validated pairs
    pub fn new(qa_pairs: Vec<QaPair>) -> Self {
        let offered = qa_pairs.len();
        Self { qa_pairs, offered }
    }

    /// Build from the raw `qaPairs` array of a request.
    ///
    /// Only entries that are objects with a string `question` are kept. A
    /// missing or non-string `answer` counts as an empty answer.
    pub fn from_raw_pairs(raw: &[Value]) -> Self {
        let qa_pairs = raw
            .iter()
            .filter_map(|entry| {
                let question = entry.get("question")?.as_str()?;
                let answer = entry.get("answer").and_then(Value::as_str).unwrap_or("");
                Some(QaPair::new(question, answer))
            })
            .collect();

        Self {
            qa_pairs,
            offered: raw.len(),
        }
    }
}

/// A single interview turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    Start(StartAction),
    Respond(RespondAction),
    End(EndAction),
}

impl Turn {
    pub fn action(&self) -> Action {
        match self {
            Turn::Start(_) => Action::Start,
            Turn::Respond(_) => Action::Respond,
            Turn::End(_) => Action::End,
        }
    }
}
