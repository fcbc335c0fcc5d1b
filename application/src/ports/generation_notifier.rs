//! Generation attempt notification port
//!
//! Observers receive one [`GenerationAttempt`] per provider call.

use interview_domain::GenerationAttempt;

/// Callback for provider-call bookkeeping
///
/// Implementations live in the infrastructure layer (e.g. a JSONL log).
pub trait GenerationNotifier: Send + Sync {
    /// Called after every provider call, successful or not
    fn on_attempt(&self, attempt: &GenerationAttempt);

    /// Called once when every model in every round has failed
    fn on_exhausted(&self, _calls: usize, _last_error: &str) {}
}

/// No-op notifier for when attempt reporting is not needed
pub struct NoProgress;

impl GenerationNotifier for NoProgress {
    fn on_attempt(&self, _attempt: &GenerationAttempt) {}
}
