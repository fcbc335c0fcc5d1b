//! Prompt domain
//!
//! Templates for the provider prompts of each turn, plus the deterministic
//! fallback used when the provider cannot be reached.

mod fallback;
mod template;

pub use fallback::FallbackSynthesizer;
pub use template::{InterviewPromptTemplate, strip_quotes};
