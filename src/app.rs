use axum::{http::Method, middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
};

use crate::config::{Config, ServerConfig};
use crate::handlers::{
    create_api_router, health_check, metrics_handler, security_headers_middleware, ServiceInfo,
};
use crate::observability::{observability_middleware, Metrics};
use crate::services::SyntheticDataService;

/// Assemble the full HTTP surface with its middleware stack
pub fn create_app(
    metrics: Arc<Metrics>,
    synthetic_data: Arc<SyntheticDataService>,
    config: &Config,
) -> Router {
    let service_info = Arc::new(ServiceInfo::from(&config.observability));

    let routes = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics.clone())
        .route("/health/status", get(health_check))
        .with_state(service_info)
        .merge(create_api_router(synthetic_data));

    with_middleware(routes, metrics, &config.server)
}

/// Wrap `router` in the service middleware stack.
///
/// Each layer wraps the ones above it, so security headers are outermost and
/// request metrics only see requests that passed the body limit and timeout.
pub fn with_middleware(router: Router, metrics: Arc<Metrics>, server: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    router
        .layer(middleware::from_fn(move |req, next| {
            observability_middleware(metrics.clone(), req, next)
        }))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(RequestBodyLimitLayer::new(server.max_request_size))
        .layer(cors)
        .layer(middleware::from_fn(security_headers_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ObservabilityConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                request_timeout_seconds: 30,
                max_request_size: 1024,
            },
            observability: ObservabilityConfig {
                service_name: "galaxy-test".to_string(),
                service_version: "9.9.9".to_string(),
                otlp_endpoint: None,
                log_level: "info".to_string(),
                enable_json_logging: false,
            },
        }
    }

    fn app_with_config(metrics: Arc<Metrics>, config: &Config) -> Router {
        let synthetic_data = Arc::new(SyntheticDataService::new(metrics.clone()));
        create_app(metrics, synthetic_data, config)
    }

    fn app(metrics: Arc<Metrics>) -> Router {
        app_with_config(metrics, &test_config())
    }

    #[tokio::test]
    async fn test_all_routes_respond() {
        let metrics = Arc::new(Metrics::new().unwrap());

        for uri in ["/", "/api/ping", "/api/synthetic-data", "/health/status", "/metrics"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = app(metrics.clone()).oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK, "route {}", uri);
            assert_eq!(response.headers()["x-frame-options"], "DENY");
        }
    }

    #[tokio::test]
    async fn test_health_reports_configured_service() {
        let metrics = Arc::new(Metrics::new().unwrap());

        let request = Request::builder()
            .uri("/health/status")
            .body(Body::empty())
            .unwrap();
        let response = app(metrics).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body["service"], "galaxy-test");
        assert_eq!(body["version"], "9.9.9");
    }

    #[tokio::test]
    async fn test_requests_are_counted_by_route() {
        let metrics = Arc::new(Metrics::new().unwrap());

        for _ in 0..2 {
            let request = Request::builder()
                .uri("/api/synthetic-data")
                .body(Body::empty())
                .unwrap();
            app(metrics.clone()).oneshot(request).await.unwrap();
        }

        let counter = metrics
            .http_requests_total
            .with_label_values(&["GET", "/api/synthetic-data", "200"]);
        assert_eq!(counter.get(), 2.0);
        assert_eq!(metrics.synthetic_batches_generated_total.get(), 2.0);
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let mut config = test_config();
        config.server.max_request_size = 16;

        let request = Request::builder()
            .uri("/api/ping")
            .header("content-length", "4096")
            .body(Body::from(vec![b'x'; 4096]))
            .unwrap();
        let response = app_with_config(metrics, &config)
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    }

    #[tokio::test]
    async fn test_body_within_limit_is_accepted() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let mut config = test_config();
        config.server.max_request_size = 16;

        let request = Request::builder()
            .uri("/api/ping")
            .header("content-length", "8")
            .body(Body::from(vec![b'x'; 8]))
            .unwrap();
        let response = app_with_config(metrics, &config)
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_handler_times_out() {
        let metrics = Arc::new(Metrics::new().unwrap());
        let mut config = test_config();
        config.server.request_timeout_seconds = 1;

        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done"
            }),
        );
        let app = with_middleware(slow, metrics, &config.server);

        let request = Request::builder().uri("/slow").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let metrics = Arc::new(Metrics::new().unwrap());

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/synthetic-data")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "GET")
            .body(Body::empty())
            .unwrap();
        let response = app(metrics).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
