//! Upstream provider implementations.
//!
//! Contains the concrete strategies behind the [`LlmProvider`] trait defined
//! in `goshmind-core`:
//!
//! - [`openai_compat`]: direct chat completions (one request per exchange).
//! - [`assistants`]: a [`ThreadRunBackend`] for the Assistants API, driven by
//!   the bounded poller in `goshmind-core`.
//!
//! [`create_provider`] picks one at startup from the configured strategy.
//!
//! [`LlmProvider`]: goshmind_core::llm::provider::LlmProvider
//! [`ThreadRunBackend`]: goshmind_core::llm::thread_run::ThreadRunBackend

pub mod assistants;
pub mod openai_compat;

use std::time::Duration;

use goshmind_core::llm::box_provider::BoxLlmProvider;
use goshmind_core::llm::thread_run::{PollPolicy, ThreadRunProvider};
use goshmind_types::config::{PollingConfig, UpstreamConfig};
use goshmind_types::llm::{LlmError, UpstreamStrategy};

use crate::credentials::{UpstreamCredentials, ASSISTANT_ID_VAR};

use self::assistants::OpenAiAssistantsBackend;
use self::openai_compat::config::OpenAiCompatConfig;
use self::openai_compat::OpenAiCompatibleProvider;

/// Create a [`BoxLlmProvider`] for the configured upstream strategy.
///
/// # Errors
///
/// Returns [`LlmError::Configuration`] if the thread/run strategy is selected
/// without an assistant id, before any network call is made.
pub fn create_provider(
    upstream: &UpstreamConfig,
    polling: &PollingConfig,
    credentials: &UpstreamCredentials,
) -> Result<BoxLlmProvider, LlmError> {
    match upstream.strategy {
        UpstreamStrategy::DirectCompletion => {
            let config = OpenAiCompatConfig::from_upstream(upstream, credentials.api_key.clone());
            Ok(BoxLlmProvider::new(OpenAiCompatibleProvider::new(config)?))
        }
        UpstreamStrategy::ThreadRun => {
            let assistant_id = credentials.assistant_id.clone().ok_or_else(|| {
                LlmError::Configuration(format!(
                    "the thread_run strategy requires {ASSISTANT_ID_VAR}"
                ))
            })?;
            let backend = OpenAiAssistantsBackend::new(
                credentials.api_key.clone(),
                assistant_id,
                &upstream.base_url,
                Duration::from_secs(upstream.request_timeout_secs),
            )?;
            let provider = ThreadRunProvider::new(backend, PollPolicy::from(polling));
            Ok(BoxLlmProvider::new(provider))
        }
    }
}
