//! `goshmind config` - print the effective configuration.

use anyhow::Result;
use console::style;

use goshmind_infra::credentials::UpstreamCredentials;
use goshmind_types::config::RelayConfig;

/// Print `config` plus a redacted credentials summary.
///
/// Missing credentials are reported, not treated as an error, so the command
/// helps diagnose exactly that situation.
pub fn show(
    config: &RelayConfig,
    credentials: Option<&UpstreamCredentials>,
    json: bool,
) -> Result<()> {
    let credentials_line = credentials
        .map(UpstreamCredentials::redacted)
        .unwrap_or_else(|| "api_key=unset assistant_id=unset".to_string());

    if json {
        let mut value = serde_json::to_value(config)?;
        value["credentials"] = serde_json::Value::String(credentials_line);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", toml::to_string_pretty(config)?);
    println!("# {} {credentials_line}", style("credentials:").dim());
    Ok(())
}
