//! `GET /api/alerts`: threshold alerts for every registered location.
//!
//! Alerts are derived from each location's latest reading on every request.
//! Locations without readings contribute nothing.
use axum::{
    extract::State, http::StatusCode, response::IntoResponse, response::Response, routing::get,
    Json, Router,
};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, error, info};

use super::{error_response, ApiQuery};
use crate::risk::{self, AlertStatus, HazardType};
use crate::{locations, store, Config};

// ---

pub fn router() -> Router<(PgPool, Config)> {
    // ---
    Router::new().route("/alerts", get(handler))
}

/// Query parameters for the alert feed
#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    #[serde(default)]
    status: AlertStatus,
    location_id: Option<String>,
}

async fn handler(
    ApiQuery(params): ApiQuery<AlertsQuery>,
    State((pool, _config)): State<(PgPool, Config)>,
) -> Response {
    // ---
    info!("GET /api/alerts - {:?}", params);

    let mut readings = Vec::new();
    for location in locations::all() {
        match store::latest_reading(&pool, location.id).await {
            Ok(Some(reading)) => readings.push(reading),
            Ok(None) => debug!("No readings yet for {}", location.id),
            Err(e) => {
                error!("Failed to load latest reading: {:#}", e);
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load readings");
            }
        }
    }

    let alerts = risk::derive_alerts(
        &readings,
        &HazardType::ALL,
        params.status,
        params.location_id.as_deref(),
    );
    info!(
        "Derived {} alerts, worst severity {}",
        alerts.len(),
        risk::overall_severity(&alerts)
    );

    (StatusCode::OK, Json(alerts)).into_response()
}
