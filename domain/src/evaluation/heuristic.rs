//! Deterministic answer scoring
//!
//! Scores are derived from the answer text only, so an evaluation is always
//! available even when the provider is down.
//!
//! | Signal | Points |
//! |--------|--------|
//! | coverage | `floor(chars / 100)`, at most 10 |
//! | examples (`for example`, `code`, `demo`, ...) | 2 |
//! | trade-offs (`pros`, `cons`, `edge cases`, ...) | 2 |
//!
//! The two structure signals together add at most 3, and the final score is
//! capped at 10 after coverage has already saturated.

use crate::interview::QaPair;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Average used when there is nothing to average
pub const DEFAULT_AVERAGE_SCORE: u32 = 7;

const MAX_SCORE: u32 = 10;
const CHARS_PER_POINT: usize = 100;
const STRUCTURE_SIGNAL_POINTS: u32 = 2;
const MAX_STRUCTURE_BOOST: u32 = 3;
const DETAILED_ANSWER_CHARS: usize = 200;

const COVERAGE_BASE_WEIGHT: f64 = 0.6;
const COVERAGE_WEIGHT: f64 = 0.4;

static EXAMPLES_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)for example|e\.g\.|example|code|snippet|demo").expect("valid regex")
});

static TRADEOFFS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)trade-?offs?|pros|cons|pitfalls|edge cases|limitations").expect("valid regex")
});

pub const IMPROVE_DETAIL: &str = "Add more detail and walk through concrete steps";
pub const IMPROVE_EXAMPLES: &str = "Support the answer with an example or code snippet";
pub const IMPROVE_TRADEOFFS: &str = "Discuss trade-offs, edge cases or limitations";

pub const STRENGTH_DETAIL: &str = "Detailed, well-developed answer";
pub const STRENGTH_EXAMPLES: &str = "Backed the answer with concrete examples";
pub const STRENGTH_TRADEOFFS: &str = "Considered trade-offs and edge cases";

/// Feedback bucket for a single answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerFeedback {
    Strong,
    Good,
    NeedsDepth,
}

impl AnswerFeedback {
    pub fn from_score(score: u32) -> Self {
        match score {
            8.. => AnswerFeedback::Strong,
            6..=7 => AnswerFeedback::Good,
            _ => AnswerFeedback::NeedsDepth,
        }
    }
}

/// Heuristic evaluation of one question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnalysis {
    pub question_number: usize,
    pub question: String,
    pub answer: String,
    pub score: u32,
    pub feedback: AnswerFeedback,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl QuestionAnalysis {
    pub fn is_answered(&self) -> bool {
        !self.answer.trim().is_empty()
    }
}

/// Score a single answer.
///
/// `question_number` is 1-based.
pub fn analyze_answer(question_number: usize, pair: &QaPair) -> QuestionAnalysis {
    let trimmed = pair.answer.trim();
    let len = trimmed.chars().count();

    let coverage_score = ((len / CHARS_PER_POINT) as u32).min(MAX_SCORE);
    let has_examples = EXAMPLES_PATTERN.is_match(trimmed);
    let has_tradeoffs = TRADEOFFS_PATTERN.is_match(trimmed);

    let signal_points = |present: bool| if present { STRUCTURE_SIGNAL_POINTS } else { 0 };
    let structure_boost =
        (signal_points(has_examples) + signal_points(has_tradeoffs)).min(MAX_STRUCTURE_BOOST);
    let score = (coverage_score + structure_boost).min(MAX_SCORE);

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if len < DETAILED_ANSWER_CHARS {
        improvements.push(IMPROVE_DETAIL.to_string());
    } else {
        strengths.push(STRENGTH_DETAIL.to_string());
    }
    if has_examples {
        strengths.push(STRENGTH_EXAMPLES.to_string());
    } else {
        improvements.push(IMPROVE_EXAMPLES.to_string());
    }
    if has_tradeoffs {
        strengths.push(STRENGTH_TRADEOFFS.to_string());
    } else {
        improvements.push(IMPROVE_TRADEOFFS.to_string());
    }

    QuestionAnalysis {
        question_number,
        question: pair.question.clone(),
        answer: pair.answer.clone(),
        score,
        feedback: AnswerFeedback::from_score(score),
        strengths,
        improvements,
    }
}

/// Score every pair, numbering them from 1 in caller order
pub fn analyze_pairs(pairs: &[QaPair]) -> Vec<QuestionAnalysis> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| analyze_answer(i + 1, pair))
        .collect()
}

/// Coverage-weighted aggregate score in `1..=10`.
///
/// `offered` is the number of question entries the caller sent. Unanswered
/// questions reduce the score multiplicatively: with zero coverage the
/// result is at most `round(avg * 0.6)`.
pub fn overall_score(analyses: &[QuestionAnalysis], offered: usize) -> u32 {
    let average = if analyses.is_empty() {
        DEFAULT_AVERAGE_SCORE as f64
    } else {
        let total: u32 = analyses.iter().map(|a| a.score).sum();
        (total as f64 / analyses.len() as f64).round()
    };

    let coverage = if offered == 0 {
        1.0
    } else {
        let answered = analyses.iter().filter(|a| a.is_answered()).count();
        answered as f64 / offered as f64
    };

    let weighted = (average * (COVERAGE_BASE_WEIGHT + COVERAGE_WEIGHT * coverage)).round();
    (weighted as u32).clamp(1, MAX_SCORE)
}
