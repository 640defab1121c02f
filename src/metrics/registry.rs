// Prometheus metrics registry and collectors

use crate::error::{ApiError, Result};
use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec,
    Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // HTTP METRICS
    // ============================================================================

    /// Total number of HTTP requests
    pub static ref REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("http_requests_total", "Total number of HTTP requests"),
        &["method", "route", "status_code"],
        REGISTRY
    ).unwrap();

    /// Request duration histogram
    pub static ref REQUEST_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        HistogramOpts::new("http_request_duration_seconds", "Request duration in seconds")
            .buckets(vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
        &["method", "route"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // MESSAGE METRICS
    // ============================================================================

    /// Messages handler invocations
    pub static ref MESSAGE_EVENTS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("message_events_total", "Total message handler invocations"),
        &["operation"], // operation: list, create, get
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| ApiError::Internal(format!("metrics encoding failed: {}", e)))?;
    String::from_utf8(buffer).map_err(|e| ApiError::Internal(e.to_string()))
}
