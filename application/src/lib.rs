//! Application layer for interview-orchestrator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RetryPolicy;
pub use ports::{
    generation_notifier::{GenerationNotifier, NoProgress},
    llm_gateway::{GatewayError, LlmGateway},
    session_id::{FixedSessionId, SessionIdGenerator},
};
pub use use_cases::conduct_interview::{
    ConductInterviewUseCase, InterviewRequest, QuestionReply, SessionReport, TurnResponse,
};
pub use use_cases::generate_text::{GenerationClient, GenerationFailure};
