//! Domain layer for interview-orchestrator
//!
//! This crate contains the core interview logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Turns
//!
//! An interview is a sequence of independent turns (`start`, `respond`,
//! `end`). Each turn carries everything needed to compute its response;
//! nothing is remembered between turns.
//!
//! ## Degraded mode
//!
//! Provider output is never required: [`FallbackSynthesizer`] produces
//! questions locally, [`SummaryPayload::neutral`] stands in for a missing
//! summary, and the heuristic scorer works from answer text alone.

pub mod core;
pub mod evaluation;
pub mod generation;
pub mod interview;
pub mod prompt;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use evaluation::{
    AnswerFeedback, ParseOutcome, QuestionAnalysis, SessionOutcome, SummaryPayload,
    categories_for, try_parse,
};
pub use generation::{AttemptOutcome, GenerationAttempt};
pub use interview::{
    Action, EndAction, InterviewContext, QaPair, RespondAction, Role, StartAction, Turn,
};
pub use prompt::{FallbackSynthesizer, InterviewPromptTemplate, strip_quotes};
