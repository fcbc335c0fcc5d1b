//! Random session identifiers

use interview_application::SessionIdGenerator;
use uuid::Uuid;

/// Hands out a fresh v4 UUID per question turn.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSessionIdGenerator;

impl SessionIdGenerator for UuidSessionIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
