//! Configuration for the OpenAI-compatible direct completion provider.

use std::time::Duration;

use secrecy::SecretString;

use goshmind_observe::genai_attrs::PROVIDER_OPENAI;
use goshmind_types::config::UpstreamConfig;

/// Configuration for an OpenAI-compatible chat-completions endpoint.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Provider name reported in logs and spans.
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
    /// Model used when a request leaves `model` empty.
    pub model: String,
    /// Per-HTTP-call timeout.
    pub request_timeout: Duration,
}

impl OpenAiCompatConfig {
    /// Build from the `[upstream]` section plus a resolved key.
    pub fn from_upstream(upstream: &UpstreamConfig, api_key: SecretString) -> Self {
        Self {
            provider_name: PROVIDER_OPENAI.into(),
            base_url: upstream.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: upstream.model.clone(),
            request_timeout: Duration::from_secs(upstream.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_upstream_trims_trailing_slash() {
        let upstream = UpstreamConfig {
            base_url: "http://localhost:9000/v1/".to_string(),
            model: "gpt-4o-mini".to_string(),
            request_timeout_secs: 15,
            ..Default::default()
        };
        let config = OpenAiCompatConfig::from_upstream(&upstream, SecretString::from("sk-test"));
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.provider_name, "openai");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
    }
}
