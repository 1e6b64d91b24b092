//! Risk engine for flood and extreme-heat monitoring.
//!
//! This module is the gateway (EMBP) for the pure, I/O-free part of the
//! service. It exposes two independent severity paths that callers pick
//! between:
//! - [`score`]: normalized sub-scores, a weighted overall score, a level and
//!   reasons. Used by the dashboard (`/api/risk/latest`).
//! - [`classify_flood`] / [`classify_heat`]: raw threshold buckets. Used by
//!   alert generation through [`derive_alerts`].
//!
//! The two paths are not numerically reconciled with each other.
use std::fmt;

use serde::Serialize;

mod alerts;
mod classifier;
mod scorer;

pub use alerts::{derive_alerts, overall_severity, Alert, AlertStatus, HazardType};
pub use classifier::{classify_flood, classify_heat};
pub use scorer::{score, RiskAssessment};

// ---

/// Discrete risk level shared by the scorer and the classifier.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Overall score at or above which the level is `High`.
pub const HIGH_SCORE: f64 = 75.0;

/// Overall score at or above which the level is `Medium`.
pub const MEDIUM_SCORE: f64 = 45.0;

impl Severity {
    // ---
    /// Step function from an overall score in [0, 100] to a level.
    pub fn from_score(overall: f64) -> Self {
        // ---
        if overall >= HIGH_SCORE {
            Severity::High
        } else if overall >= MEDIUM_SCORE {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
