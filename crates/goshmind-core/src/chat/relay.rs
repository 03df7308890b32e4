//! Chat relay orchestrating one exchange end to end.
//!
//! An exchange validates the request, resolves (or creates) the session,
//! sends the full history plus the new user turn upstream, and persists both
//! turns only once the upstream has produced a non-empty reply. A failed
//! exchange leaves the stored history untouched, so a client retry re-sends
//! cleanly.
//!
//! Exchanges for the same session are serialized through [`SessionLocks`];
//! exchanges for different sessions run concurrently.

use tracing::field::Empty;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use goshmind_observe::genai_attrs::{
    GEN_AI_RESPONSE_ID, GEN_AI_USAGE_INPUT_TOKENS, GEN_AI_USAGE_OUTPUT_TOKENS, OP_CHAT,
};
use goshmind_types::chat::{ChatReply, ChatRequest, Session, Turn};
use goshmind_types::config::UpstreamConfig;
use goshmind_types::error::{RelayError, StoreError};
use goshmind_types::llm::{CompletionRequest, Message};

use crate::chat::locks::SessionLocks;
use crate::chat::store::SessionStore;
use crate::llm::box_provider::BoxLlmProvider;

/// Per-request parameters sent upstream with every exchange.
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub model: String,
    pub system_prompt: Option<String>,
    pub max_tokens: u32,
    pub temperature: Option<f64>,
}

impl From<&UpstreamConfig> for RelaySettings {
    fn from(config: &UpstreamConfig) -> Self {
        let system_prompt = Some(config.system_prompt.clone()).filter(|p| !p.trim().is_empty());
        Self {
            model: config.model.clone(),
            system_prompt,
            max_tokens: config.max_tokens,
            temperature: Some(config.temperature),
        }
    }
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self::from(&UpstreamConfig::default())
    }
}

/// Forwards user turns to the upstream provider and records each exchange.
///
/// Generic over `SessionStore` so goshmind-core never depends on
/// goshmind-infra; the provider is boxed because the upstream strategy is
/// chosen at startup.
pub struct ChatRelay<S: SessionStore> {
    store: S,
    provider: BoxLlmProvider,
    settings: RelaySettings,
    locks: SessionLocks,
}

impl<S: SessionStore> ChatRelay<S> {
    pub fn new(store: S, provider: BoxLlmProvider, settings: RelaySettings) -> Self {
        Self {
            store,
            provider,
            settings,
            locks: SessionLocks::new(),
        }
    }

    /// Access the session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Name of the configured upstream provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Return the session, creating it if absent.
    ///
    /// Idempotent: losing a creation race to another caller is not an error.
    pub async fn ensure_session(&self, session_id: &str) -> Result<Session, RelayError> {
        if let Some(session) = self.store.get(session_id).await {
            return Ok(session);
        }

        match self.store.create(session_id).await {
            Ok(session) => {
                let sessions = self.store.count().await;
                info!(session_id, sessions, "Session created");
                Ok(session)
            }
            Err(StoreError::Duplicate(_)) => self
                .store
                .get(session_id)
                .await
                .ok_or_else(|| RelayError::SessionNotFound(session_id.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Run one chat exchange and return the assistant reply.
    pub async fn handle_chat(&self, request: &ChatRequest) -> Result<ChatReply, RelayError> {
        if let Err(errors) = request.validate() {
            warn!(
                session_id = %request.session_id,
                errors = errors.len(),
                "Rejected invalid chat request"
            );
            return Err(RelayError::InvalidRequest(errors));
        }

        let session_id = request.session_id.as_str();
        let _guard = self.locks.acquire(session_id).await;

        let session = self.ensure_session(session_id).await?;
        let mut history = session.messages;
        history.push(Turn::user(request.message.as_str()));

        let completion_request = self.build_request(&history);
        let exchange_id = Uuid::now_v7();
        let span = info_span!(
            "chat",
            otel.name = %format!("{OP_CHAT} {}", self.settings.model),
            gen_ai.operation.name = OP_CHAT,
            gen_ai.provider.name = %self.provider.name(),
            gen_ai.request.model = %self.settings.model,
            gen_ai.response.id = Empty,
            gen_ai.conversation.id = Empty,
            gen_ai.usage.input_tokens = Empty,
            gen_ai.usage.output_tokens = Empty,
            exchange_id = %exchange_id,
            session_id,
        );

        let response = self
            .provider
            .complete(&completion_request)
            .instrument(span.clone())
            .await
            .map_err(|e| {
                error!(
                    parent: &span,
                    session_id,
                    provider = %self.provider.name(),
                    error = %e,
                    "Upstream call failed"
                );
                RelayError::from(e)
            })?;

        span.record(GEN_AI_RESPONSE_ID, response.id.as_str());
        span.record(GEN_AI_USAGE_INPUT_TOKENS, response.usage.input_tokens);
        span.record(GEN_AI_USAGE_OUTPUT_TOKENS, response.usage.output_tokens);

        if response.content.is_empty() {
            error!(parent: &span, session_id, response_id = %response.id, "Upstream returned no content");
            return Err(RelayError::Upstream("no response content".to_string()));
        }

        let reply = response.content;
        history.push(Turn::assistant(reply.as_str()));
        let stored = self.store.replace_messages(session_id, history).await?;

        info!(
            parent: &span,
            session_id,
            turns = stored.messages.len(),
            stop_reason = %response.stop_reason,
            "Chat exchange completed"
        );

        Ok(ChatReply {
            response: reply,
            session_id: request.session_id.clone(),
        })
    }

    /// Ordered turn history of a session; empty if the session is unknown.
    pub async fn get_history(&self, session_id: &str) -> Vec<Turn> {
        self.store
            .get(session_id)
            .await
            .map(|s| s.messages)
            .unwrap_or_default()
    }

    /// Build the upstream request from the prospective history.
    fn build_request(&self, history: &[Turn]) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: history.iter().map(Message::from).collect(),
            system: self.settings.system_prompt.clone(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }
}
