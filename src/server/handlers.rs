// HTTP request handlers

use super::routes::AppState;
use crate::error::{ApiError, Result};
use crate::messages::{CreateMessageRequest, MessageEvent};
use crate::metrics;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Prometheus text exposition.
pub async fn metrics_handler() -> Result<impl IntoResponse> {
    let body = metrics::gather_metrics()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}

fn emit(state: &AppState, event: MessageEvent) {
    metrics::record_message_event(event.operation());
    state.sink.record(event);
}

/// `GET /messages`
pub async fn list_messages(State(state): State<AppState>) -> StatusCode {
    emit(&state, MessageEvent::Listed);
    StatusCode::OK
}

/// `POST /messages`
///
/// The body reaches the sink exactly as decoded; nothing is stored and
/// nothing is returned.
pub async fn create_message(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(body) = payload.map_err(|rejection| {
        let err = ApiError::from(rejection);
        warn!("Rejected create message body: {}", err);
        err
    })?;

    debug!("Create message payload has {} field(s)", body.fields.len());
    emit(&state, MessageEvent::Created(body));
    Ok(StatusCode::CREATED)
}

/// `GET /messages/:id`
pub async fn get_message(
    State(state): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id.map_err(|rejection| {
        let err = ApiError::from(rejection);
        warn!("Rejected message id: {}", err);
        err
    })?;

    emit(&state, MessageEvent::Fetched { id });
    Ok(StatusCode::OK)
}
