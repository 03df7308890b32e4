//! Thread/run upstream strategy.
//!
//! Instead of one stateless completion call, the upstream keeps a remote
//! thread: the relay creates a thread seeded with prior turns, appends the
//! new user message, starts a run against a pre-configured assistant, polls
//! the run until it reaches a terminal status, then reads the latest
//! assistant message from the thread.
//!
//! Polling is bounded by [`PollPolicy::max_attempts`]; past that bound the
//! exchange fails with [`LlmError::PollTimeout`]. Waiting between polls uses
//! `tokio::time::sleep`, so other requests keep running.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, Span};

use goshmind_observe::genai_attrs::GEN_AI_CONVERSATION_ID;

use goshmind_types::config::PollingConfig;
use goshmind_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, Message, MessageRole, RunStatus, StopReason,
    Usage,
};

use super::provider::LlmProvider;

/// Snapshot of a remote run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    pub status: RunStatus,
    /// Upstream-provided failure detail, if any.
    pub last_error: Option<String>,
}

/// Remote thread/run resources exposed by the upstream.
///
/// Implementations live in goshmind-infra (e.g., `OpenAiAssistantsBackend`).
pub trait ThreadRunBackend: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Create a thread pre-populated with `history`. Returns the thread id.
    fn create_thread(
        &self,
        history: &[Message],
    ) -> impl Future<Output = Result<String, LlmError>> + Send;

    /// Append a user message to an existing thread.
    fn add_user_message(
        &self,
        thread_id: &str,
        content: &str,
    ) -> impl Future<Output = Result<(), LlmError>> + Send;

    /// Start a run of the configured assistant. Returns the run id.
    fn start_run(&self, thread_id: &str) -> impl Future<Output = Result<String, LlmError>> + Send;

    /// Fetch the current status of a run.
    fn run_state(
        &self,
        thread_id: &str,
        run_id: &str,
    ) -> impl Future<Output = Result<RunState, LlmError>> + Send;

    /// Text of the newest assistant message written by `run_id`, if any.
    ///
    /// Seeded assistant turns from earlier exchanges must not be returned.
    fn latest_assistant_message(
        &self,
        thread_id: &str,
        run_id: &str,
    ) -> impl Future<Output = Result<Option<String>, LlmError>> + Send;
}

/// How often and how long to poll a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from(&PollingConfig::default())
    }
}

impl From<&PollingConfig> for PollPolicy {
    fn from(config: &PollingConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.interval_ms),
            // Zero would never poll at all.
            max_attempts: config.max_attempts.max(1),
        }
    }
}

/// [`LlmProvider`] that drives a [`ThreadRunBackend`] to completion.
///
/// The system prompt in the request is ignored: the remote assistant carries
/// its own instructions.
pub struct ThreadRunProvider<B: ThreadRunBackend> {
    backend: B,
    policy: PollPolicy,
}

impl<B: ThreadRunBackend> ThreadRunProvider<B> {
    pub fn new(backend: B, policy: PollPolicy) -> Self {
        Self { backend, policy }
    }

    /// Poll until the run is terminal or the attempt budget is spent.
    async fn wait_for_run(&self, thread_id: &str, run_id: &str) -> Result<(), LlmError> {
        let mut last_status = RunStatus::Queued;

        for attempt in 1..=self.policy.max_attempts {
            tokio::time::sleep(self.policy.interval).await;

            let state = self.backend.run_state(thread_id, run_id).await?;
            debug!(run_id, attempt, status = %state.status, "Polled run status");
            last_status = state.status;

            if state.status == RunStatus::Completed {
                return Ok(());
            }
            if state.status.is_terminal() {
                return Err(LlmError::RunFailed {
                    run_id: run_id.to_string(),
                    status: state.status,
                    last_error: state.last_error,
                });
            }
        }

        Err(LlmError::PollTimeout {
            run_id: run_id.to_string(),
            status: last_status,
            attempts: self.policy.max_attempts,
        })
    }
}

impl<B: ThreadRunBackend> LlmProvider for ThreadRunProvider<B> {
    fn name(&self) -> &str {
        self.backend.name()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let (latest, earlier) = request
            .messages
            .split_last()
            .filter(|(last, _)| last.role == MessageRole::User)
            .ok_or_else(|| {
                LlmError::InvalidRequest("conversation must end with a user message".to_string())
            })?;

        let history: Vec<Message> = earlier
            .iter()
            .filter(|m| m.role != MessageRole::System)
            .cloned()
            .collect();

        let thread_id = self.backend.create_thread(&history).await?;
        Span::current().record(GEN_AI_CONVERSATION_ID, thread_id.as_str());
        self.backend
            .add_user_message(&thread_id, &latest.content)
            .await?;
        let run_id = self.backend.start_run(&thread_id).await?;
        debug!(thread_id = %thread_id, run_id = %run_id, "Started run");

        self.wait_for_run(&thread_id, &run_id).await?;

        let content = self
            .backend
            .latest_assistant_message(&thread_id, &run_id)
            .await?
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: run_id,
            content,
            model: request.model.clone(),
            stop_reason: StopReason::EndTurn,
            usage: Usage::default(),
        })
    }
}
