use anyhow::Context;
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tokio::net::TcpListener;
use tracing::{error, info};

use data_galaxy::{
    create_app, init_observability, services::SyntheticDataService, shutdown_observability,
    Config, Metrics,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first (no subscriber yet)
    let config = Config::from_environment().context("Failed to load configuration")?;

    init_observability(
        &config.observability.service_name,
        &config.observability.service_version,
        config.observability.otlp_endpoint.as_deref(),
        &config.observability.log_level,
        config.observability.enable_json_logging,
    )
    .context("Failed to initialize observability")?;

    info!(
        "Starting {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    let metrics = Arc::new(Metrics::new().context("Failed to initialize metrics")?);
    let synthetic_data = Arc::new(SyntheticDataService::new(metrics.clone()));

    let app = create_app(metrics, synthetic_data, &config);

    let host: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid host address: {}", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server listening on {}", addr);

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
        shutdown_observability().await;
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}
