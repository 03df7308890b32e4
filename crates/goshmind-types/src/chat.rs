//! Conversation session, turn, and relay request/response types.
//!
//! A session is identified by an opaque client-chosen string and holds the
//! ordered turn history of one conversation. The request/response shapes
//! mirror the JSON bodies of `POST /api/chat` (camelCase on the wire).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

/// Maximum number of characters accepted in a user-authored message.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Author of a turn within a session.
///
/// Sessions only ever hold user and assistant turns; the system instruction
/// is supplied per request and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message in a conversation.
///
/// The timestamp is assigned by the relay when the turn is appended, never by
/// the upstream provider. It serializes as an RFC 3339 / ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// A user turn stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// An assistant turn stamped with the current time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One ongoing conversation.
///
/// `created_at` and `updated_at` are bookkeeping only: sessions never expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    pub messages: Vec<Turn>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// A new session with no turns.
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: session_id.into(),
        }
    }

    /// Check field constraints, collecting every violation.
    ///
    /// Length is measured in characters, not bytes.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let chars = self.message.chars().count();
        if chars == 0 {
            errors.push(FieldError::too_small("message", 1));
        } else if chars > MAX_MESSAGE_CHARS {
            errors.push(FieldError::too_big("message", MAX_MESSAGE_CHARS));
        }

        if self.session_id.is_empty() {
            errors.push(FieldError::too_small("sessionId", 1));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Successful reply to `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
}

/// A single field-level validation failure.
///
/// Shaped like a schema-validator issue: `path` names the offending field,
/// `code` is machine-readable, `message` is for humans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: Vec<String>,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.to_string()],
            code: code.to_string(),
            message: message.into(),
        }
    }

    fn too_small(field: &str, minimum: usize) -> Self {
        Self::new(
            field,
            "too_small",
            format!("String must contain at least {minimum} character(s)"),
        )
    }

    fn too_big(field: &str, maximum: usize) -> Self {
        Self::new(
            field,
            "too_big",
            format!("String must contain at most {maximum} character(s)"),
        )
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.join("."), self.message)
    }
}
