//! GoshMind CLI and HTTP server entry point.
//!
//! Binary name: `goshmind`
//!
//! Parses CLI arguments, loads configuration and credentials, wires the chat
//! relay, then dispatches to the requested command or starts the server.

mod cli;
mod http;
mod state;

use clap::Parser;

use goshmind_infra::config::load_relay_config;
use goshmind_infra::credentials::UpstreamCredentials;
use goshmind_observe::tracing_setup::{init_tracing, shutdown_tracing, LogFormat};

use cli::{Cli, Commands, ServeArgs};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_tracing(format, cli.otel, cli.log_directive()).map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_relay_config(&cli.config_path).await;

    match cli.command {
        Some(Commands::Config) => {
            let credentials = UpstreamCredentials::from_env().ok();
            cli::config::show(&config, credentials.as_ref(), cli.json)?;
        }

        Some(Commands::Chat { message, session }) => {
            let credentials = UpstreamCredentials::from_env()?;
            let state = AppState::init(config, &credentials)?;
            cli::chat::run(&state, message, session, cli.json).await?;
        }

        serve => {
            let args = match serve {
                Some(Commands::Serve(args)) => args,
                _ => ServeArgs::default(),
            };
            args.apply(&mut config);

            let credentials = UpstreamCredentials::from_env()?;
            let state = AppState::init(config, &credentials)?;
            serve_http(state).await?;
        }
    }

    Ok(())
}

/// Bind the listener and serve until Ctrl+C or SIGTERM.
async fn serve_http(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "GoshMind listening");
    println!(
        "  {} GoshMind listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
