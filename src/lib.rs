//! UrbanResQ: flood and extreme-heat risk monitoring backend.
//!
//! The crate is split along the Explicit Module Boundary Pattern (EMBP):
//! - `risk`: pure scoring, threshold classification and alert derivation
//! - `models` / `locations`: readings and the static location registry
//! - `store` / `schema`: PostgreSQL persistence of readings
//! - `config`: environment-driven configuration
//! - `routes`: the axum HTTP gateway
//!
//! Sibling modules import shared types from the crate root rather than from
//! each other, so moving a type only touches this file.

pub mod config;
pub mod locations;
pub mod models;
pub mod risk;
pub mod routes;
pub mod schema;
pub mod store;

pub use config::Config;
pub use locations::Location;
pub use models::{NewReading, Reading};
pub use risk::{
    classify_flood, classify_heat, derive_alerts, overall_severity, score, Alert, AlertStatus,
    HazardType, RiskAssessment, Severity,
};
