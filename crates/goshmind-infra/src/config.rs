//! Relay configuration loader.
//!
//! Reads `goshmind.toml` and deserializes it into [`RelayConfig`]. Falls back
//! to defaults when the file is missing or malformed, then applies
//! environment overrides (`PORT`, `HOST`, `GOSHMIND_WEB_DIR`,
//! `GOSHMIND_STRATEGY`).

use std::path::Path;

use goshmind_types::config::RelayConfig;
use goshmind_types::llm::UpstreamStrategy;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "goshmind.toml";

/// Load configuration from `path`, then apply environment overrides.
///
/// - If the file does not exist, starts from [`RelayConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and starts from the default.
pub async fn load_relay_config(path: &Path) -> RelayConfig {
    let mut config = read_config_file(path).await;
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    config
}

async fn read_config_file(path: &Path) -> RelayConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return RelayConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return RelayConfig::default();
        }
    };

    match toml::from_str::<RelayConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            RelayConfig::default()
        }
    }
}

/// Apply environment overrides through `lookup`.
///
/// Unparsable values are ignored with a warning so a typo in the environment
/// never prevents startup.
pub fn apply_env_overrides<F>(config: &mut RelayConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(err) => tracing::warn!("Ignoring PORT={port:?}: {err}"),
        }
    }

    if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
        config.server.host = host;
    }

    if let Some(web_dir) = lookup("GOSHMIND_WEB_DIR").filter(|d| !d.trim().is_empty()) {
        config.server.web_dir = web_dir;
    }

    if let Some(strategy) = lookup("GOSHMIND_STRATEGY") {
        match strategy.parse::<UpstreamStrategy>() {
            Ok(strategy) => config.upstream.strategy = strategy,
            Err(err) => tracing::warn!("Ignoring GOSHMIND_STRATEGY={strategy:?}: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[tokio::test]
    async fn missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_file(&tmp.path().join(DEFAULT_CONFIG_FILE)).await;
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.upstream.strategy, UpstreamStrategy::DirectCompletion);
    }

    #[tokio::test]
    async fn valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(
            &path,
            r#"
[server]
port = 7000
web_dir = "public"

[upstream]
strategy = "thread_run"
model = "gpt-4o-mini"

[polling]
interval_ms = 250
max_attempts = 8
"#,
        )
        .await
        .unwrap();

        let config = read_config_file(&path).await;
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.web_dir, "public");
        assert_eq!(config.upstream.strategy, UpstreamStrategy::ThreadRun);
        assert_eq!(config.upstream.model, "gpt-4o-mini");
        assert_eq!(config.polling.interval_ms, 250);
        assert_eq!(config.polling.max_attempts, 8);
    }

    #[tokio::test]
    async fn invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = read_config_file(&path).await;
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.upstream.model, "gpt-4o");
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = RelayConfig::default();
        apply_env_overrides(
            &mut config,
            lookup(&[
                ("PORT", "8080"),
                ("HOST", "127.0.0.1"),
                ("GOSHMIND_WEB_DIR", "dist"),
                ("GOSHMIND_STRATEGY", "thread-run"),
            ]),
        );
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.web_dir, "dist");
        assert_eq!(config.upstream.strategy, UpstreamStrategy::ThreadRun);
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let mut config = RelayConfig::default();
        apply_env_overrides(
            &mut config,
            lookup(&[("PORT", "not-a-port"), ("GOSHMIND_STRATEGY", "polling")]),
        );
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.upstream.strategy, UpstreamStrategy::DirectCompletion);
    }
}
