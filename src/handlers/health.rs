use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

use crate::config::ObservabilityConfig;

/// Identity reported by the health endpoint
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}

impl From<&ObservabilityConfig> for ServiceInfo {
    fn from(config: &ObservabilityConfig) -> Self {
        Self {
            name: config.service_name.clone(),
            version: config.service_version.clone(),
        }
    }
}

/// Health check endpoint handler
#[instrument(name = "health_check", skip(info))]
pub async fn health_check(
    State(info): State<Arc<ServiceInfo>>,
) -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "service": info.name,
        "version": info.version,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
