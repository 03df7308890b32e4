//! LlmProvider trait definition.
//!
//! This is the seam between the relay and the upstream language model. Both
//! upstream strategies (direct completion and thread/run polling) implement
//! it, so the relay is unaware of which one is configured.

use std::future::Future;

use goshmind_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for upstream LLM backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Use
/// [`super::box_provider::BoxLlmProvider`] where dynamic dispatch is needed.
///
/// Implementations live in goshmind-infra (e.g., `OpenAiCompatibleProvider`)
/// or wrap a backend port (e.g., [`super::thread_run::ThreadRunProvider`]).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai", "openai_assistants").
    fn name(&self) -> &str;

    /// Produce a reply to the full conversation in `request`.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
