//! chatapi REST server entry point.
//!
//! Binary name: `chatapi`
//!
//! Parses CLI arguments, sets up tracing, resolves configuration, opens the
//! database, then serves the REST API until Ctrl+C or SIGTERM.

mod cli;
mod http;
mod state;

use clap::Parser;

use chatapi_infra::config::{load_server_config, resolve_data_dir};
use chatapi_infra::sqlite::pool::default_database_url;
use chatapi_observe::tracing_setup::{init_tracing, shutdown_tracing};
use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_directive(), cli.otel).map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli).await;

    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve {
            port,
            host,
            database_url,
        } => {
            let data_dir = resolve_data_dir();
            tokio::fs::create_dir_all(&data_dir).await?;

            let config = load_server_config(&data_dir).await;

            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);
            let database_url = database_url
                .or(config.database_url)
                .unwrap_or_else(|| default_database_url(&data_dir));

            let state = AppState::init(&database_url).await?;
            tracing::info!(data_dir = %data_dir.display(), "Database connection established");

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "Starting server");

            let router = http::router::build_router(state.clone());

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            state.close().await;
            tracing::info!("Server stopped");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
