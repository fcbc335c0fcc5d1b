//! Logging infrastructure: structured generation-attempt logging.
//!
//! Provides [`JsonlAttemptLogger`], a JSONL file writer that implements
//! the [`GenerationNotifier`](interview_application::GenerationNotifier) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlAttemptLogger;
