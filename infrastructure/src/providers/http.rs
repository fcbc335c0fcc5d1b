//! Shared HTTP plumbing for provider adapters

use interview_application::GatewayError;
use interview_domain::core::string::truncate_chars;
use reqwest::StatusCode;

/// Longest slice of an error body kept in a [`GatewayError`]
const ERROR_BODY_LIMIT: usize = 300;

/// Map a non-success status plus response body to a gateway error
pub fn classify_status(status: StatusCode, body: &str) -> GatewayError {
    let message = truncate_chars(body.trim(), ERROR_BODY_LIMIT).to_string();
    match status {
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(message),
        StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(message),
        _ => GatewayError::HttpStatus {
            status: status.as_u16(),
            message,
        },
    }
}

/// Map a transport-level failure to a gateway error
pub fn classify_transport(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_decode() {
        GatewayError::MalformedPayload(err.to_string())
    } else {
        GatewayError::ConnectionError(err.to_string())
    }
}

/// Send a prepared request and return the decoded JSON body
pub async fn send_json(request: reqwest::RequestBuilder) -> Result<serde_json::Value, GatewayError> {
    let response = request.send().await.map_err(classify_transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(classify_status(status, &body));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| GatewayError::MalformedPayload(e.to_string()))
}
