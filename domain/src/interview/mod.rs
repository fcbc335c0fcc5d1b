//! Interview domain
//!
//! Everything a single turn needs is rebuilt from the request: there is no
//! session store, so these types are plain values.
//!
//! - [`context::InterviewContext`]: role, framework and job-description excerpt
//! - [`turn::Turn`]: the `start` / `respond` / `end` actions and their payloads

pub mod context;
pub mod turn;

pub use context::{InterviewContext, JOB_DESCRIPTION_MAX_CHARS, Role};
pub use turn::{Action, EndAction, QaPair, RespondAction, StartAction, Turn};
