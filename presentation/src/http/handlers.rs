//! Request handlers

use super::dto::{InterviewRequestDto, QuestionResponseDto, ReportResponseDto};
use super::error::ApiError;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use interview_application::{ConductInterviewUseCase, LlmGateway, TurnResponse};
use interview_domain::DomainError;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

/// Shared, read-only handler state
///
/// Holds no per-session data; every turn is computed from its own body.
pub struct InterviewState<G: LlmGateway + 'static> {
    use_case: ConductInterviewUseCase<G>,
}

impl<G: LlmGateway + 'static> InterviewState<G> {
    pub fn new(use_case: ConductInterviewUseCase<G>) -> Self {
        Self { use_case }
    }

    pub fn use_case(&self) -> &ConductInterviewUseCase<G> {
        &self.use_case
    }
}

/// Decode the body in two steps so a missing or non-string `action` is a
/// caller error (400) while wrongly-typed optional fields are not.
fn decode(body: &[u8]) -> Result<InterviewRequestDto, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::internal(format!("Request body is not valid JSON: {}", e)))?;

    let Some(object) = value.as_object() else {
        return Err(DomainError::InvalidAction("request body is not an object".to_string()).into());
    };
    if !matches!(object.get("action"), Some(Value::String(_))) {
        return Err(DomainError::InvalidAction("<missing>".to_string()).into());
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::internal(format!("Malformed interview request: {}", e)))
}

pub(super) async fn interview<G: LlmGateway + 'static>(
    State(state): State<Arc<InterviewState<G>>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = decode(&body)?.into_request()?;
    debug!("Dispatching '{}' turn", request.turn.action());

    let response = match state.use_case.execute(request).await {
        TurnResponse::Question(reply) => Json(QuestionResponseDto::from(reply)).into_response(),
        TurnResponse::Report(report) => Json(ReportResponseDto::from(report)).into_response(),
    };
    Ok(response)
}

pub(super) async fn health<G: LlmGateway + 'static>(
    State(state): State<Arc<InterviewState<G>>>,
) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "models": state.use_case.client().models(),
    }))
}
