//! CLI command definitions for the `goshmind` binary.
//!
//! Uses clap derive macros for argument parsing. Running without a
//! subcommand starts the HTTP server.

pub mod chat;
pub mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use goshmind_infra::config::DEFAULT_CONFIG_FILE;
use goshmind_types::config::RelayConfig;
use goshmind_types::llm::UpstreamStrategy;

/// Voice-first chat relay in front of an OpenAI-compatible model.
#[derive(Parser)]
#[command(name = "goshmind", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the TOML config file.
    #[arg(
        long = "config",
        global = true,
        env = "GOSHMIND_CONFIG",
        default_value = DEFAULT_CONFIG_FILE
    )]
    pub config_path: PathBuf,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Detailed logs (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "GOSHMIND_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default log directive derived from `-v`/`-q`, used when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,goshmind=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default).
    Serve(ServeArgs),

    /// Send one message through the configured upstream and print the reply.
    Chat {
        /// Message text (1-2000 characters).
        message: String,

        /// Session id to attach the exchange to.
        #[arg(short, long, default_value = "cli")]
        session: String,
    },

    /// Print the effective configuration with secrets redacted.
    Config,
}

/// Overrides for `serve`; unset flags keep the file/env value.
#[derive(clap::Args, Default)]
pub struct ServeArgs {
    /// Bind address.
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Upstream strategy (`direct_completion` or `thread_run`).
    #[arg(long)]
    pub strategy: Option<UpstreamStrategy>,
}

impl ServeArgs {
    /// Apply flag overrides on top of the loaded config.
    pub fn apply(&self, config: &mut RelayConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(strategy) = self.strategy {
            config.upstream.strategy = strategy;
        }
    }
}
