use axum::{extract::State, response::Json, routing::get, Router};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::models::{MessageResponse, SyntheticPlanetBatch};
use crate::services::SyntheticDataService;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the API testing! Visit /api/ping or /api/synthetic-data to explore.";

pub const PING_MESSAGE: &str = "Hello from the Data Galaxy!";

/// Shared application state for the public API
#[derive(Clone)]
pub struct ApiState {
    pub synthetic_data: Arc<SyntheticDataService>,
}

/// Create API router with all public endpoints
pub fn create_api_router(synthetic_data: Arc<SyntheticDataService>) -> Router {
    let state = ApiState { synthetic_data };

    Router::new()
        .route("/", get(root))
        .route("/api/ping", get(ping))
        .route("/api/synthetic-data", get(synthetic_data_handler))
        .with_state(state)
}

/// Welcome message pointing at the other endpoints
#[instrument(name = "root")]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}

#[instrument(name = "ping")]
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse::new(PING_MESSAGE))
}

/// Fabricate a fresh batch of planets on every call
#[instrument(name = "synthetic_data", skip(state))]
pub async fn synthetic_data_handler(State(state): State<ApiState>) -> Json<SyntheticPlanetBatch> {
    let batch = state.synthetic_data.generate_batch();
    info!("Serving {} synthetic planets", batch.len());
    Json(batch)
}
