//! Prometheus metrics recording and background collection.
//!
//! Provides functions to record per-request HTTP metrics (counters and
//! histograms) and to periodically update the document-count gauge.

use metrics::{counter, gauge, histogram};
use searchlab_core::store::StrategyEngine;
use std::time::Duration;

/// Records HTTP request metrics: increments `http_requests_total` counter and
/// records `http_request_duration_seconds` histogram, labeled by method, path,
/// and status code.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records a search operation metric, labeled by strategy and input mode.
///
/// Modes: `"text"`, `"audio"`, `"image"`.
pub fn record_search_operation(strategy: &str, mode: &str) {
    counter!(
        "searchlab_search_total",
        "strategy" => strategy.to_string(),
        "mode" => mode.to_string()
    )
    .increment(1);
}

/// Records a write operation metric, labeled by operation type.
///
/// Operation types: `"index"`, `"delete"`, `"clear"`.
pub fn record_write_operation(operation: &str) {
    counter!(
        "searchlab_operations_total",
        "operation" => operation.to_string()
    )
    .increment(1);
}

/// Updates the `searchlab_documents_total` gauge from the engine.
pub fn update_engine_metrics(engine: &StrategyEngine) {
    gauge!("searchlab_documents_total").set(engine.document_count() as f64);
}
