//! `GET /api/locations`: the static location registry.

use axum::{routing::get, Json, Router};

use crate::locations::{self, Location};

// ---

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/locations", get(handler))
}

async fn handler() -> Json<&'static [Location]> {
    Json(locations::all())
}
