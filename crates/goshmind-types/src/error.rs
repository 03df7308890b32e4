use thiserror::Error;

use crate::chat::FieldError;
use crate::llm::LlmError;

/// Errors from session store operations (used by trait definitions in goshmind-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session '{0}' not found")]
    NotFound(String),

    #[error("session '{0}' already exists")]
    Duplicate(String),
}

/// Errors surfaced by the chat relay.
///
/// Only `InvalidRequest` is client-correctable; every other variant is
/// reported to clients as an opaque failure.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid request: {}", join(.0))]
    InvalidRequest(Vec<FieldError>),

    #[error("session '{0}' not found")]
    SessionNotFound(String),

    #[error("session '{0}' already exists")]
    DuplicateSession(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("upstream timed out: {0}")]
    UpstreamTimeout(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl RelayError {
    /// Whether the caller can fix the request and try again.
    pub fn is_client_error(&self) -> bool {
        matches!(self, RelayError::InvalidRequest(_))
    }
}

impl From<StoreError> for RelayError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => RelayError::SessionNotFound(id),
            StoreError::Duplicate(id) => RelayError::DuplicateSession(id),
        }
    }
}

impl From<LlmError> for RelayError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::PollTimeout { .. } => RelayError::UpstreamTimeout(e.to_string()),
            LlmError::Configuration(msg) => RelayError::Configuration(msg),
            other => RelayError::Upstream(other.to_string()),
        }
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::RunStatus;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound("s1".to_string());
        assert_eq!(err.to_string(), "session 's1' not found");
    }

    #[test]
    fn test_store_error_maps_to_relay_error() {
        let err: RelayError = StoreError::Duplicate("s1".to_string()).into();
        assert!(matches!(err, RelayError::DuplicateSession(id) if id == "s1"));
    }

    #[test]
    fn test_poll_timeout_maps_to_upstream_timeout() {
        let err: RelayError = LlmError::PollTimeout {
            run_id: "run_1".to_string(),
            status: RunStatus::InProgress,
            attempts: 3,
        }
        .into();
        assert!(matches!(err, RelayError::UpstreamTimeout(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_configuration_error_keeps_message() {
        let err: RelayError = LlmError::Configuration("missing assistant id".to_string()).into();
        assert_eq!(err.to_string(), "configuration error: missing assistant id");
    }

    #[test]
    fn test_provider_error_maps_to_upstream() {
        let err: RelayError = LlmError::AuthenticationFailed.into();
        assert_eq!(err.to_string(), "upstream error: authentication failed");
    }

    #[test]
    fn test_invalid_request_display_lists_fields() {
        let err = RelayError::InvalidRequest(vec![
            FieldError::new("message", "too_small", "empty"),
            FieldError::new("sessionId", "too_small", "empty"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid request: message: empty; sessionId: empty"
        );
        assert!(err.is_client_error());
    }
}
