//! End-of-session report

use super::heuristic::{QuestionAnalysis, analyze_pairs, overall_score};
use super::summary::SummaryPayload;
use crate::interview::EndAction;
use serde::{Deserialize, Serialize};

/// Merged qualitative and quantitative evaluation of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutcome {
    /// Coverage-weighted aggregate in `1..=10`
    pub score: u32,
    pub feedback: SummaryPayload,
    pub question_analysis: Vec<QuestionAnalysis>,
}

impl SessionOutcome {
    /// Combine a summary with the heuristic analysis of the closing turn
    pub fn assemble(feedback: SummaryPayload, end: &EndAction) -> Self {
        let question_analysis = analyze_pairs(&end.qa_pairs);
        let score = overall_score(&question_analysis, end.offered);
        Self {
            score,
            feedback,
            question_analysis,
        }
    }
}
