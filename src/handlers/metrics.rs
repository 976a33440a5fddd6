use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::instrument;

use crate::observability::Metrics;

/// Prometheus text exposition format
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Expose the registry in Prometheus text format
#[instrument(name = "metrics_handler", skip(metrics))]
pub async fn metrics_handler(
    State(metrics): State<Arc<Metrics>>,
) -> Result<impl IntoResponse, (StatusCode, &'static str)> {
    let body = metrics.encode().map_err(|e| {
        crate::error_with_trace!(error = %e, "Failed to encode metrics");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode metrics")
    })?;

    Ok(([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], body))
}
