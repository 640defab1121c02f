// messages-api - HTTP routing service for a messages resource

use anyhow::Result;
use clap::Parser;
use messages_api::cli::Args;
use messages_api::config::AppConfig;
use messages_api::messages::TracingSink;
use messages_api::server;
use messages_api::utils::logging;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Phase 1: Load configuration, flags last
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting messages-api v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Serve until a shutdown signal arrives
    server::serve(config, Arc::new(TracingSink), shutdown_signal()).await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
