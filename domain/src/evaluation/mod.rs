//! Session evaluation
//!
//! Two independent halves produce the end-of-session report:
//!
//! - [`heuristic`]: deterministic per-answer scoring, no provider involved
//! - [`summary`]: tolerant parsing of the provider's qualitative summary
//!
//! [`outcome::SessionOutcome`] merges both.

pub mod categories;
pub mod heuristic;
pub mod outcome;
pub mod summary;

pub use categories::categories_for;
pub use heuristic::{
    AnswerFeedback, DEFAULT_AVERAGE_SCORE, QuestionAnalysis, analyze_answer, analyze_pairs,
    overall_score,
};
pub use outcome::SessionOutcome;
pub use summary::{ParseOutcome, SummaryPayload, try_parse};
