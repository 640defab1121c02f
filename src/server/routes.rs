// HTTP routes configuration

use super::handlers::{create_message, get_message, health_handler, list_messages, metrics_handler};
use super::middleware::{request_id_layers, track_metrics};
use crate::config::AppConfig;
use crate::messages::MessageSink;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn MessageSink>,
}

pub fn create_router(config: AppConfig, sink: Arc<dyn MessageSink>) -> Router {
    let body_limit = config.server.body_limit_bytes;
    let metrics_enabled = config.metrics.enabled;

    let state = AppState { sink };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let mut app: Router<AppState> = Router::new()
        .route("/health", get(health_handler))
        .route("/messages", get(list_messages).post(create_message))
        .route("/messages/:id", get(get_message));

    if metrics_enabled {
        app = app.route("/metrics", get(metrics_handler));
    }

    app
        // Enforced by the extractors, so overflow surfaces as a JSON error
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(track_metrics))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id)
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id),
        )
        .with_state(state)
}
