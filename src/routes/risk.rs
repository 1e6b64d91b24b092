//! `GET /api/risk/latest`: weighted risk assessment of the latest reading.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, response::Response, routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, error, info};

use super::{error_response, no_reading, ApiQuery};
use crate::risk::{self, RiskAssessment};
use crate::{store, Config};

// ---

pub fn router() -> Router<(PgPool, Config)> {
    // ---
    Router::new().route("/risk/latest", get(handler))
}

#[derive(Debug, Deserialize)]
pub struct RiskQuery {
    location_id: String,
}

/// Assessment plus the reading it was computed from.
#[derive(Debug, Serialize)]
struct RiskResponse {
    location_id: String,
    timestamp: DateTime<Utc>,
    #[serde(flatten)]
    assessment: RiskAssessment,
}

async fn handler(
    ApiQuery(params): ApiQuery<RiskQuery>,
    State((pool, _config)): State<(PgPool, Config)>,
) -> Response {
    // ---
    info!("GET /api/risk/latest - location {}", params.location_id);

    let reading = match store::latest_reading(&pool, &params.location_id).await {
        Ok(Some(reading)) => reading,
        Ok(None) => return no_reading(&params.location_id),
        Err(e) => {
            error!("Failed to load latest reading: {:#}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load reading");
        }
    };

    let assessment = risk::score(&reading);
    debug!(
        "Risk for {}: overall {:.1} ({})",
        reading.location_id, assessment.overall_score, assessment.level
    );

    let body = RiskResponse {
        location_id: reading.location_id,
        timestamp: reading.timestamp,
        assessment,
    };
    (StatusCode::OK, Json(body)).into_response()
}
