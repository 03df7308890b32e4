//! Application state wiring the relay together.
//!
//! `ChatRelay` is generic over its session store, but AppState pins it to the
//! concrete in-memory implementation.

use std::sync::Arc;

use goshmind_core::chat::relay::{ChatRelay, RelaySettings};
use goshmind_core::llm::box_provider::BoxLlmProvider;
use goshmind_infra::credentials::UpstreamCredentials;
use goshmind_infra::llm::create_provider;
use goshmind_infra::session::InMemorySessionStore;
use goshmind_types::config::RelayConfig;

/// Concrete relay type pinned to infra implementations.
pub type ConcreteRelay = ChatRelay<InMemorySessionStore>;

/// Shared application state, used by both CLI commands and HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ConcreteRelay>,
    pub config: Arc<RelayConfig>,
}

impl AppState {
    /// Build the relay for the configured upstream strategy.
    ///
    /// Fails fast on configuration problems (e.g. the thread/run strategy
    /// without an assistant id) so they surface at startup, not per request.
    pub fn init(config: RelayConfig, credentials: &UpstreamCredentials) -> anyhow::Result<Self> {
        let provider = create_provider(&config.upstream, &config.polling, credentials)?;
        Ok(Self::with_provider(config, provider))
    }

    /// Wire state around an already-built provider.
    pub fn with_provider(config: RelayConfig, provider: BoxLlmProvider) -> Self {
        let settings = RelaySettings::from(&config.upstream);
        let relay = ChatRelay::new(InMemorySessionStore::new(), provider, settings);

        tracing::info!(
            provider = relay.provider_name(),
            strategy = %config.upstream.strategy,
            model = %config.upstream.model,
            "Chat relay initialized"
        );

        Self {
            relay: Arc::new(relay),
            config: Arc::new(config),
        }
    }
}
