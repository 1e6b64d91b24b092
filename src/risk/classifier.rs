//! Threshold classifier used for alert generation.
//!
//! Maps raw values straight to a [`Severity`] without going through the
//! weighted score. Boundaries are inclusive (`>=`) and checked from the
//! highest severity down.
//!
//! Flood HIGH is a disjunction (water OR rain) while heat HIGH is a
//! conjunction (temperature AND humidity). That asymmetry is domain policy.

use super::Severity;

// ---

const FLOOD_HIGH_WATER_CM: f64 = 60.0;
const FLOOD_HIGH_RAIN_MM: f64 = 30.0;
const FLOOD_MEDIUM_WATER_CM: f64 = 40.0;
const FLOOD_MEDIUM_RAIN_MM: f64 = 15.0;

const HEAT_HIGH_TEMP_C: f64 = 35.0;
const HEAT_HIGH_HUMIDITY: i32 = 70;
const HEAT_MEDIUM_TEMP_C: f64 = 33.0;

/// Flood severity from water level and rainfall.
pub fn classify_flood(water_level_cm: f64, rainfall_mm: f64) -> Severity {
    // ---
    if water_level_cm >= FLOOD_HIGH_WATER_CM || rainfall_mm >= FLOOD_HIGH_RAIN_MM {
        Severity::High
    } else if water_level_cm >= FLOOD_MEDIUM_WATER_CM || rainfall_mm >= FLOOD_MEDIUM_RAIN_MM {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Heat severity from temperature and relative humidity (percent).
pub fn classify_heat(temp_c: f64, humidity: i32) -> Severity {
    // ---
    if temp_c >= HEAT_HIGH_TEMP_C && humidity >= HEAT_HIGH_HUMIDITY {
        Severity::High
    } else if temp_c >= HEAT_MEDIUM_TEMP_C {
        Severity::Medium
    } else {
        Severity::Low
    }
}
