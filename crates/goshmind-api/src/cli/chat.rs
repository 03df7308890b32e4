//! One-shot chat command.
//!
//! Runs a single exchange through the same relay the server uses, against an
//! in-process store, and prints the reply.

use anyhow::Result;
use console::style;

use goshmind_types::chat::ChatRequest;
use goshmind_types::error::RelayError;

use crate::state::AppState;

/// Send `message` under `session_id` and print the assistant reply.
pub async fn run(state: &AppState, message: String, session_id: String, json: bool) -> Result<()> {
    let request = ChatRequest::new(message, session_id);

    let reply = match state.relay.handle_chat(&request).await {
        Ok(reply) => reply,
        Err(RelayError::InvalidRequest(errors)) => {
            for error in &errors {
                eprintln!("  {} {error}", style("✗").red());
            }
            anyhow::bail!("invalid chat request");
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("GOSH-MIND").cyan().bold(), style("›").dim());
    println!();
    for line in reply.response.lines() {
        println!("  {line}");
    }
    println!();
    println!(
        "  {}",
        style(format!("session: {}", reply.session_id)).dim()
    );
    Ok(())
}
