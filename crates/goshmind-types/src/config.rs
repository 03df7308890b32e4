//! Relay configuration types.
//!
//! `RelayConfig` represents `goshmind.toml`. Every field has a default, so an
//! empty or missing file yields a working direct-completion setup. Secrets are
//! never part of this file; they come from the environment.

use serde::{Deserialize, Serialize};

use crate::llm::UpstreamStrategy;

/// Default system instruction sent with every direct completion.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are GOSH-MIND, a helpful AI assistant. \
Provide clear, concise, and helpful responses to user questions. \
Be friendly and conversational while maintaining professionalism.";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub polling: PollingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled client bundle. Served only if it exists.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_web_dir() -> String {
    "client/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: default_web_dir(),
        }
    }
}

/// Upstream language-model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default)]
    pub strategy: UpstreamStrategy,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Per-HTTP-call timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f64 {
    0.7
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            strategy: UpstreamStrategy::default(),
            base_url: default_base_url(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Run-status polling bounds for the thread/run strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Polls before giving up with a timeout error.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_max_attempts() -> u32 {
    60
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            max_attempts: default_max_attempts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_config_default_values() {
        let config = RelayConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.upstream.strategy, UpstreamStrategy::DirectCompletion);
        assert_eq!(config.upstream.model, "gpt-4o");
        assert_eq!(config.upstream.max_tokens, 1000);
        assert_eq!(config.polling.interval_ms, 1000);
        assert_eq!(config.polling.max_attempts, 60);
    }

    #[test]
    fn test_relay_config_deserialize_empty() {
        let config: RelayConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert!(config.upstream.system_prompt.starts_with("You are GOSH-MIND"));
    }

    #[test]
    fn test_relay_config_deserialize_partial_sections() {
        let toml_str = r#"
[server]
port = 8080

[upstream]
strategy = "thread_run"
model = "gpt-4o-mini"

[polling]
max_attempts = 5
"#;
        let config: RelayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.upstream.strategy, UpstreamStrategy::ThreadRun);
        assert_eq!(config.upstream.model, "gpt-4o-mini");
        assert_eq!(config.upstream.temperature, 0.7);
        assert_eq!(config.polling.max_attempts, 5);
        assert_eq!(config.polling.interval_ms, 1000);
    }
}
