//! Reading ingestion and retrieval routes.
//!
//! - `POST /api/readings`: validate a sensor payload and append it
//! - `GET  /api/readings/latest?location_id=`
//! - `GET  /api/readings/history?location_id=&hours=&limit=`
use axum::{
    extract::State, http::StatusCode, response::IntoResponse, response::Response, routing::get,
    routing::post, Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, error, info, warn};

use super::{error_response, no_reading, ApiJson, ApiQuery};
use crate::config::{check_range, HISTORY_HOURS_RANGE, HISTORY_LIMIT_RANGE};
use crate::{store, Config, NewReading};

// ---

pub fn router() -> Router<(PgPool, Config)> {
    // ---
    Router::new()
        .route("/readings", post(ingest))
        .route("/readings/latest", get(latest))
        .route("/readings/history", get(history))
}

/// Query parameters for the latest-reading lookup
#[derive(Debug, Deserialize)]
pub struct LatestQuery {
    location_id: String,
}

/// Query parameters for the reading history window
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    location_id: String,
    hours: Option<u32>,
    limit: Option<u32>,
}

async fn ingest(
    State((pool, _config)): State<(PgPool, Config)>,
    ApiJson(payload): ApiJson<NewReading>,
) -> Response {
    // ---
    info!("POST /api/readings - location {}", payload.location_id);

    let reading = match payload.into_reading(Utc::now()) {
        Ok(reading) => reading,
        Err(e) => {
            warn!("Rejected reading: {}", e);
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
        }
    };

    if let Err(e) = store::insert_reading(&pool, &reading).await {
        error!("Failed to store reading: {:#}", e);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store reading");
    }

    debug!(
        "Stored reading for {} at {}",
        reading.location_id, reading.timestamp
    );
    (StatusCode::CREATED, Json(reading)).into_response()
}

async fn latest(
    ApiQuery(params): ApiQuery<LatestQuery>,
    State((pool, _config)): State<(PgPool, Config)>,
) -> Response {
    // ---
    info!("GET /api/readings/latest - location {}", params.location_id);

    match store::latest_reading(&pool, &params.location_id).await {
        Ok(Some(reading)) => (StatusCode::OK, Json(reading)).into_response(),
        Ok(None) => no_reading(&params.location_id),
        Err(e) => {
            error!("Failed to load latest reading: {:#}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load reading")
        }
    }
}

async fn history(
    ApiQuery(params): ApiQuery<HistoryQuery>,
    State((pool, config)): State<(PgPool, Config)>,
) -> Response {
    // ---
    info!("GET /api/readings/history - {:?}", params);

    let hours = params.hours.unwrap_or(config.history_default_hours);
    let limit = params.limit.unwrap_or(config.history_default_limit);

    let bounds = check_range("hours", hours, HISTORY_HOURS_RANGE)
        .and_then(|_| check_range("limit", limit, HISTORY_LIMIT_RANGE));
    if let Err(e) = bounds {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string());
    }

    match store::reading_history(&pool, &params.location_id, hours, limit).await {
        Ok(readings) => {
            debug!("Returning {} readings", readings.len());
            (StatusCode::OK, Json(readings)).into_response()
        }
        Err(e) => {
            error!("Failed to load reading history: {:#}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load readings")
        }
    }
}
