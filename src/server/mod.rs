//! Axum-based HTTP server for the messages API.
//!
//! # Components
//!
//! - `handlers`: the `/messages` routes plus `/health` and `/metrics`.
//! - `middleware`: request ID tracking and per-route request metrics.
//! - `routes`: the router that ties handlers, layers and state together.

mod handlers;
mod middleware;
mod routes;

pub use handlers::HealthResponse;
pub use routes::{create_router, AppState};

use crate::config::AppConfig;
use crate::error::Result;
use crate::messages::MessageSink;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn serve<F>(config: AppConfig, sink: Arc<dyn MessageSink>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    let app = create_router(config, sink);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
