// src/routes/health.rs
//! API health check endpoints for the UrbanResQ backend.
//!
//! This module defines the `/` and `/health` routes used by container
//! orchestrators and the dashboard to verify that the service is running and
//! able to respond to HTTP requests. It follows the Explicit Module Boundary
//! Pattern (EMBP):
//! - Internal to this file: endpoint handler(s) and related types
//! - Exports to the gateway (`mod.rs`): a subrouter containing the routes

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the status endpoints.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Handle `GET /` and `GET /health`.
///
/// Returns a static JSON object indicating the API is reachable. This
/// endpoint does not touch the database.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "UrbanResQ Backend",
    })
}

/// Create a subrouter containing the status routes.
///
/// Generic over the application state so it can merge cleanly with the
/// gateway router, regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}
