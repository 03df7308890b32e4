//! Conversation history HTTP handler.
//!
//! Endpoint:
//! - GET /api/conversation/{session_id} - Ordered turn history of a session

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use goshmind_types::chat::Turn;

use crate::state::AppState;

/// Response body: `{ "messages": [...] }`.
#[derive(Debug, Serialize)]
pub struct ConversationBody {
    pub messages: Vec<Turn>,
}

/// GET /api/conversation/{session_id} - Unknown sessions yield an empty list.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<ConversationBody> {
    let messages = state.relay.get_history(&session_id).await;
    Json(ConversationBody { messages })
}
