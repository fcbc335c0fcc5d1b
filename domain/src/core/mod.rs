//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: text-generation model identifiers (Gemini, GPT, custom)
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: UTF-8 safe text helpers

pub mod error;
pub mod model;
pub mod string;
