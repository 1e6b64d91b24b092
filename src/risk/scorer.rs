//! Weighted risk scoring for a single reading.
//!
//! Each signal is mapped linearly onto [0, 100] and clamped, the sub-scores
//! are combined with fixed weights, and the overall score is bucketed into a
//! [`Severity`]. Scores are kept at full precision; rounding to one decimal
//! happens only when an assessment is serialized.

use serde::{Serialize, Serializer};

use super::Severity;
use crate::Reading;

// ---

/// Water level (cm) that maps to a flood score of 100.
const FLOOD_FULL_SCALE_CM: f64 = 90.0;

/// Temperature (°C) below which the heat score is 0.
const HEAT_BASELINE_C: f64 = 26.0;

/// Temperature span (°C) above the baseline that maps to a heat score of 100.
const HEAT_SPAN_C: f64 = 14.0;

/// Salinity that maps to a salinity score of 100.
const SALINITY_FULL_SCALE: f64 = 10.0;

const FLOOD_WEIGHT: f64 = 0.5;
const HEAT_WEIGHT: f64 = 0.4;
const SALINITY_WEIGHT: f64 = 0.1;

const NORMAL_CONDITIONS: &str = "Normal conditions";

/// Result of scoring one reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    // ---
    #[serde(serialize_with = "one_decimal")]
    pub flood_score: f64,
    #[serde(serialize_with = "one_decimal")]
    pub heat_score: f64,
    #[serde(serialize_with = "one_decimal")]
    pub salinity_score: f64,
    #[serde(serialize_with = "one_decimal")]
    pub overall_score: f64,
    pub level: Severity,
    pub reasons: Vec<String>,
}

/// Score a reading. Total over all numeric input; never fails.
pub fn score(reading: &Reading) -> RiskAssessment {
    // ---
    let flood_score = clamp_score(reading.water_level_cm / FLOOD_FULL_SCALE_CM * 100.0);
    let heat_score = clamp_score((reading.temp_c - HEAT_BASELINE_C) / HEAT_SPAN_C * 100.0);
    let salinity_score = clamp_score(reading.salinity / SALINITY_FULL_SCALE * 100.0);

    let overall_score = clamp_score(
        FLOOD_WEIGHT * flood_score + HEAT_WEIGHT * heat_score + SALINITY_WEIGHT * salinity_score,
    );

    RiskAssessment {
        flood_score,
        heat_score,
        salinity_score,
        overall_score,
        level: Severity::from_score(overall_score),
        reasons: reasons(reading),
    }
}

/// Clamp to [0, 100]. NaN is treated as "no signal".
fn clamp_score(value: f64) -> f64 {
    // ---
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

fn one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 10.0).round() / 10.0)
}

// ---

/// One predicate → message step of the reasons pipeline.
struct Rule {
    applies: fn(&Reading) -> bool,
    message: &'static str,
}

/// Rules grouped per signal. Within a signal the first matching rule wins,
/// so higher thresholds are listed first. Signals are evaluated in order.
const REASON_RULES: &[&[Rule]] = &[
    &[
        Rule {
            applies: |r| r.water_level_cm >= 60.0,
            message: "High water level",
        },
        Rule {
            applies: |r| r.water_level_cm >= 30.0,
            message: "Water level rising",
        },
    ],
    &[
        Rule {
            applies: |r| r.temp_c >= 35.0,
            message: "Extreme heat",
        },
        Rule {
            applies: |r| r.temp_c >= 32.0,
            message: "High temperature",
        },
    ],
    &[Rule {
        applies: |r| r.salinity >= 5.0,
        message: "High salinity",
    }],
];

fn reasons(reading: &Reading) -> Vec<String> {
    // ---
    let mut reasons: Vec<String> = REASON_RULES
        .iter()
        .filter_map(|signal| signal.iter().find(|rule| (rule.applies)(reading)))
        .map(|rule| rule.message.to_string())
        .collect();

    if reasons.is_empty() {
        reasons.push(NORMAL_CONDITIONS.to_string());
    }
    reasons
}
