//! Chat HTTP handler.
//!
//! Endpoint:
//! - POST /api/chat - Relay one user message and return the assistant reply

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use goshmind_types::chat::{ChatReply, ChatRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat - Run one chat exchange.
///
/// Body rejections are mapped by hand so malformed JSON gets the same
/// 400 shape as a failed field validation.
pub async fn post_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload?;
    let reply = state.relay.handle_chat(&request).await?;
    Ok(Json(reply))
}
