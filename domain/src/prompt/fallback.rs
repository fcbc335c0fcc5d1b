//! Deterministic questions for when the provider is unavailable
//!
//! Nothing here performs I/O and nothing can fail, so a turn always has a
//! question to return.

use crate::interview::InterviewContext;

/// Template-based question producer
pub struct FallbackSynthesizer;

impl FallbackSynthesizer {
    /// Opening question for `start`
    pub fn question(context: &InterviewContext, focus: Option<&str>) -> String {
        let mut question = format!(
            "In {}, how would you approach a relevant scenario",
            context.subject()
        );
        if let Some(focus) = focus {
            question.push_str(&format!(" focused on {}", focus));
        }
        question.push_str("? Please outline key trade-offs");
        if context.has_job_description() {
            question.push_str(" (align to the job description context)");
        }
        question.push('.');
        question
    }

    /// Follow-up question for `respond`
    pub fn followup(context: &InterviewContext, focus: Option<&str>) -> String {
        let mut question = format!(
            "Building on your previous answer, how would you apply it in {}",
            context.subject()
        );
        if let Some(focus) = focus {
            question.push_str(&format!(" when working on {}", focus));
        }
        question.push_str(
            "? Walk through the trade-offs, the edge cases you would watch for, and how you would test it",
        );
        if context.has_job_description() {
            question.push_str(" (align to the job description context)");
        }
        question.push('.');
        question
    }
}
