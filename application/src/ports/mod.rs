//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod generation_notifier;
pub mod llm_gateway;
pub mod session_id;
