//! JSON/HTTP surface
//!
//! One POST endpoint dispatches interview turns; `GET /health` reports the
//! candidate roster.

mod dto;
mod error;
mod handlers;

pub use dto::{InterviewRequestDto, QuestionResponseDto, ReportResponseDto};
pub use error::ApiError;
pub use handlers::InterviewState;

use axum::{
    Router,
    routing::{get, post},
};
use interview_application::LlmGateway;
use std::sync::Arc;

/// Build the router with the interview endpoint mounted at `route`.
///
/// `route` must start with `/`.
pub fn router<G: LlmGateway + 'static>(state: Arc<InterviewState<G>>, route: &str) -> Router {
    Router::new()
        .route(route, post(handlers::interview::<G>))
        .route("/health", get(handlers::health::<G>))
        .with_state(state)
}
