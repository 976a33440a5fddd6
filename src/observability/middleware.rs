use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::{sync::Arc, time::Instant};
use tracing::{error, info, Instrument};

use super::{get_current_trace_id, Metrics};

/// Middleware for automatic request tracing and metrics collection
pub async fn observability_middleware(
    metrics: Arc<Metrics>,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let uri = request.uri().to_string();

    let user_agent = request
        .headers()
        .get("user-agent")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    // Group by route template so unmatched paths do not explode label cardinality
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched_path| matched_path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let span_name = format!("{} {}", method, endpoint);

    let span = tracing::info_span!(
        target: "data_galaxy::http",
        "{}", span_name,
        otel.name = %span_name,
        otel.kind = "server",
        http.method = %method,
        http.route = %endpoint,
        http.url = %uri,
        http.user_agent = %user_agent,
        http.status_code = tracing::field::Empty,
        http.response_time_ms = tracing::field::Empty,
    );

    async {
        metrics.increment_in_flight(&method, &endpoint);

        let trace_id = get_current_trace_id().unwrap_or_default();

        info!(trace_id = %trace_id, method = %method, path = %uri, user_agent = %user_agent, "Processing request");

        let response = next.run(request).await;

        let duration = start_time.elapsed();
        let duration_ms = duration.as_millis();
        let status_code = response.status().as_u16();

        let current_span = tracing::Span::current();
        current_span.record("http.status_code", status_code);
        current_span.record("http.response_time_ms", duration_ms);

        metrics.record_http_request(&method, &endpoint, status_code, duration.as_secs_f64());
        metrics.decrement_in_flight(&method, &endpoint);

        if status_code >= 400 {
            error!(
                trace_id = %trace_id,
                method = %method,
                path = %uri,
                status_code = status_code,
                duration_ms = duration_ms,
                "Request completed with error"
            );
        } else {
            info!(
                trace_id = %trace_id,
                method = %method,
                path = %uri,
                status_code = status_code,
                duration_ms = duration_ms,
                "Request completed successfully"
            );
        }

        response
    }
    .instrument(span)
    .await
}
