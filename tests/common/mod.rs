use std::{sync::Arc, time::Duration};

use data_galaxy::{
    config::{ObservabilityConfig, ServerConfig},
    create_app, services::SyntheticDataService, Config, Metrics,
};
use reqwest::Client;
use tokio::net::TcpListener;

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
    pub metrics: Arc<Metrics>,
}

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_seconds: 5,
            max_request_size: 64 * 1024,
        },
        observability: ObservabilityConfig {
            service_name: "data-galaxy".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            otlp_endpoint: None,
            log_level: "info".to_string(),
            enable_json_logging: false,
        },
    }
}

impl TestEnvironment {
    pub async fn new() -> Self {
        let metrics = Arc::new(Metrics::new().expect("Failed to create metrics"));
        let synthetic_data = Arc::new(SyntheticDataService::new(metrics.clone()));
        let app = create_app(metrics.clone(), synthetic_data, &test_config());

        // Start server on an ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve app");
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self {
            client,
            base_url,
            metrics,
        }
    }

    pub async fn get_json(&self, path: &str) -> (u16, serde_json::Value) {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Failed to send request");

        let status = response.status().as_u16();
        let body = response.json().await.expect("Failed to parse response");
        (status, body)
    }
}
