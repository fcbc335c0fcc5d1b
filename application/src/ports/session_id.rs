//! Session identifier port
//!
//! The orchestrator hands out an opaque id on every question turn but never
//! stores or validates it.

/// Source of opaque session identifiers
pub trait SessionIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Always returns the same id (useful for tests and replays)
pub struct FixedSessionId(pub String);

impl SessionIdGenerator for FixedSessionId {
    fn next_id(&self) -> String {
        self.0.clone()
    }
}
