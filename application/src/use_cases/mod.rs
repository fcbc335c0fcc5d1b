//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod conduct_interview;
pub mod generate_text;
