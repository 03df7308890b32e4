//! Application error type mapping relay failures to HTTP responses.
//!
//! Only validation failures carry detail back to the client. Every other
//! failure is logged with its full cause and answered with a generic 500.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use goshmind_types::chat::FieldError;
use goshmind_types::error::RelayError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Failure reported by the chat relay.
    Relay(RelayError),
    /// Request body was not valid JSON for the endpoint.
    Body(JsonRejection),
}

impl From<RelayError> for AppError {
    fn from(e: RelayError) -> Self {
        AppError::Relay(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Body(e)
    }
}

/// Client-safe description of a server-side failure.
fn public_cause(err: &RelayError) -> &'static str {
    match err {
        RelayError::Upstream(_) => "upstream model request failed",
        RelayError::UpstreamTimeout(_) => "upstream model did not respond in time",
        RelayError::Configuration(_) => "server is misconfigured",
        RelayError::SessionNotFound(_) | RelayError::DuplicateSession(_) => {
            "session storage error"
        }
        RelayError::InvalidRequest(_) => "invalid request",
    }
}

fn invalid_request(errors: &[FieldError]) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "message": "Invalid request data",
            "errors": errors,
        })),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Relay(RelayError::InvalidRequest(errors)) => invalid_request(errors),
            AppError::Body(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                invalid_request(&[FieldError::new(
                    "body",
                    "invalid_json",
                    rejection.body_text(),
                )])
            }
            AppError::Relay(e) => {
                tracing::error!(error = %e, "Chat request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "message": format!("Failed to process chat request: {}", public_cause(e)),
                    })),
                )
                    .into_response()
            }
        }
    }
}
