//! Wire types for the OpenAI Assistants (v2) thread/run endpoints.
//!
//! Only the fields the relay reads are modelled; everything else in the
//! upstream objects is ignored on deserialization.

use serde::{Deserialize, Serialize};

use goshmind_types::llm::RunStatus;

/// A message as sent when creating a thread or appending to one.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadMessageInput {
    pub role: String,
    pub content: String,
}

/// Body of `POST /threads`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateThreadRequest {
    pub messages: Vec<ThreadMessageInput>,
}

/// Body of `POST /threads/{thread_id}/runs`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRunRequest {
    pub assistant_id: String,
}

/// Any upstream object identified by `id` (threads, messages).
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRef {
    pub id: String,
}

/// Run object returned by the create and retrieve endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct RunObject {
    pub id: String,
    pub status: RunStatus,
    #[serde(default)]
    pub last_error: Option<RunLastError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunLastError {
    pub code: String,
    pub message: String,
}

/// Response of `GET /threads/{thread_id}/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageList {
    pub data: Vec<ThreadMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThreadMessage {
    pub id: String,
    pub role: String,
    /// Run that wrote the message; `None` for messages added directly.
    #[serde(default)]
    pub run_id: Option<String>,
    #[serde(default)]
    pub content: Vec<MessageContent>,
}

impl ThreadMessage {
    /// Concatenated text parts, skipping non-text content.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|part| match part {
                MessageContent::Text { text } => Some(text.value.as_str()),
                MessageContent::Other => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: TextValue },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_object_parses_last_error() {
        let json = r#"{
            "id": "run_1",
            "object": "thread.run",
            "status": "failed",
            "last_error": { "code": "server_error", "message": "Something went wrong" }
        }"#;
        let run: RunObject = serde_json::from_str(json).unwrap();
        assert_eq!(run.status, RunStatus::Failed);
        assert_eq!(run.last_error.unwrap().code, "server_error");
    }

    #[test]
    fn test_run_object_null_last_error() {
        let json = r#"{ "id": "run_1", "status": "in_progress", "last_error": null }"#;
        let run: RunObject = serde_json::from_str(json).unwrap();
        assert_eq!(run.status, RunStatus::InProgress);
        assert!(run.last_error.is_none());
    }

    #[test]
    fn test_thread_message_text_skips_images() {
        let json = r#"{
            "id": "msg_1",
            "role": "assistant",
            "content": [
                { "type": "text", "text": { "value": "Hello ", "annotations": [] } },
                { "type": "image_file", "image_file": { "file_id": "file_1" } },
                { "type": "text", "text": { "value": "world", "annotations": [] } }
            ]
        }"#;
        let msg: ThreadMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.text(), "Hello world");
        assert!(msg.run_id.is_none());
    }

    #[test]
    fn test_thread_message_parses_run_id() {
        let json = r#"{ "id": "msg_2", "role": "assistant", "run_id": "run_1", "content": [] }"#;
        let msg: ThreadMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.run_id.as_deref(), Some("run_1"));
    }
}
