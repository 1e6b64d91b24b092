//! Route gateway for the `urbanresq` HTTP API (EMBP).
//!
//! Each sibling module exports a sub-router; this module merges them and
//! attaches the shared `(PgPool, Config)` state. Resource routes live under
//! `/api`, service status routes at the root.
use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use sqlx::PgPool;

use crate::Config;

mod alerts;
mod health;
mod locations;
mod readings;
mod risk;

// ---

pub fn router(pool: PgPool, config: Config) -> Router {
    // ---
    let api = Router::new()
        .merge(locations::router())
        .merge(readings::router())
        .merge(risk::router())
        .merge(alerts::router());

    Router::new()
        .nest("/api", api)
        .merge(health::router())
        .with_state((pool, config))
}

/// JSON error body shared by all handlers: `{"detail": "..."}`.
fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    // ---
    (status, Json(json!({ "detail": detail.into() }))).into_response()
}

/// Response for a location that has no stored readings yet.
fn no_reading(location_id: &str) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("No readings found for location '{}'", location_id),
    )
}

/// Query string extractor that rejects with a 422 `{"detail"}` body.
struct ApiQuery<T>(T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // ---
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                rejection.body_text(),
            )),
        }
    }
}

/// JSON body extractor that rejects with a 422 `{"detail"}` body.
struct ApiJson<T>(T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // ---
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                rejection.body_text(),
            )),
        }
    }
}
