// Metrics module for Prometheus observability

mod registry;

pub use registry::{gather_metrics, MESSAGE_EVENTS, REQUESTS_TOTAL, REQUEST_DURATION};

/// Helper to record request metrics
pub fn record_request(method: &str, route: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[method, route, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, route])
        .observe(duration_secs);
}

/// Helper to record a message handler invocation
pub fn record_message_event(operation: &str) {
    MESSAGE_EVENTS.with_label_values(&[operation]).inc();
}
