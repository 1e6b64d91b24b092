//! Alert derivation from threshold classifications.
//!
//! Alerts are computed on demand and are not tracked through a lifecycle
//! here: `status` is whatever the caller asked for.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{classify_flood, classify_heat, Severity};
use crate::Reading;

// ---

/// Hazard an alert is raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HazardType {
    Flood,
    Heat,
}

impl HazardType {
    /// Every hazard, in evaluation order.
    pub const ALL: [HazardType; 2] = [HazardType::Flood, HazardType::Heat];

    pub fn as_str(&self) -> &'static str {
        match self {
            HazardType::Flood => "FLOOD",
            HazardType::Heat => "HEAT",
        }
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert status filter supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    Open,
    Closed,
}

/// A user-facing alert for one hazard at one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    // ---
    pub id: String,
    pub hazard_type: HazardType,
    pub severity: Severity,
    pub message: String,
    pub location_id: String,
    pub timestamp: DateTime<Utc>,
    pub status: AlertStatus,
}

/// Derive one alert per (hazard, reading) pair.
///
/// Hazards are evaluated in the order given, readings in input order within
/// each hazard, so with [`HazardType::ALL`] every flood alert comes before
/// every heat alert. When `location_id` is set only alerts for that location
/// are returned; an unknown location yields an empty vector.
pub fn derive_alerts(
    readings: &[Reading],
    hazards: &[HazardType],
    status: AlertStatus,
    location_id: Option<&str>,
) -> Vec<Alert> {
    // ---
    hazards
        .iter()
        .flat_map(|&hazard| readings.iter().map(move |reading| (hazard, reading)))
        .filter(|(_, reading)| location_id.map_or(true, |id| reading.location_id == id))
        .map(|(hazard, reading)| build_alert(hazard, reading, status))
        .collect()
}

/// Worst severity across a set of alerts, `Low` when there are none.
pub fn overall_severity(alerts: &[Alert]) -> Severity {
    alerts
        .iter()
        .map(|a| a.severity)
        .max()
        .unwrap_or(Severity::Low)
}

fn build_alert(hazard: HazardType, reading: &Reading, status: AlertStatus) -> Alert {
    // ---
    let (severity, message) = match hazard {
        HazardType::Flood => {
            let severity = classify_flood(reading.water_level_cm, reading.rainfall_mm);
            let message = format!(
                "Flood risk {}: water level {}cm, rainfall {}mm.",
                severity, reading.water_level_cm, reading.rainfall_mm
            );
            (severity, message)
        }
        HazardType::Heat => {
            let severity = classify_heat(reading.temp_c, reading.humidity);
            let message = format!(
                "Heat risk {}: temperature {}°C, humidity {}%.",
                severity, reading.temp_c, reading.humidity
            );
            (severity, message)
        }
    };

    Alert {
        id: alert_id(hazard, reading),
        hazard_type: hazard,
        severity,
        message,
        location_id: reading.location_id.clone(),
        timestamp: reading.timestamp,
        status,
    }
}

/// Same reading and hazard always produce the same id.
fn alert_id(hazard: HazardType, reading: &Reading) -> String {
    // ---
    let name = format!(
        "{}:{}:{}",
        reading.location_id,
        hazard,
        reading.timestamp.timestamp_micros()
    );
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::TimeZone;

    fn create_test_reading(
        location_id: &str,
        water: f64,
        rain: f64,
        temp: f64,
        hum: i32,
    ) -> Reading {
        // ---
        Reading {
            location_id: location_id.to_string(),
            device_id: None,
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
            water_level_cm: water,
            temp_c: temp,
            humidity: hum,
            rainfall_mm: rain,
            salinity: 0.0,
            lat: None,
            lon: None,
        }
    }

    #[test]
    fn test_two_high_alerts() {
        // ---
        let reading = create_test_reading("loc_1", 62.0, 28.0, 35.2, 76);
        let alerts = derive_alerts(&[reading], &HazardType::ALL, AlertStatus::Open, None);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].hazard_type, HazardType::Flood);
        assert_eq!(alerts[1].hazard_type, HazardType::Heat);
        assert!(alerts.iter().all(|a| a.severity == Severity::High));
        assert_eq!(overall_severity(&alerts), Severity::High);
    }

    #[test]
    fn test_messages_embed_values() {
        // ---
        let reading = create_test_reading("loc_1", 45.5, 3.0, 33.5, 64);
        let alerts = derive_alerts(&[reading], &HazardType::ALL, AlertStatus::Open, None);

        assert_eq!(
            alerts[0].message,
            "Flood risk MEDIUM: water level 45.5cm, rainfall 3mm."
        );
        assert_eq!(
            alerts[1].message,
            "Heat risk MEDIUM: temperature 33.5°C, humidity 64%."
        );
    }

    #[test]
    fn test_flood_alerts_precede_heat_alerts() {
        // ---
        let readings = [
            create_test_reading("loc_1", 10.0, 0.0, 30.0, 50),
            create_test_reading("loc_2", 70.0, 0.0, 36.0, 80),
        ];
        let alerts = derive_alerts(&readings, &HazardType::ALL, AlertStatus::Open, None);

        let order: Vec<(HazardType, &str)> = alerts
            .iter()
            .map(|a| (a.hazard_type, a.location_id.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (HazardType::Flood, "loc_1"),
                (HazardType::Flood, "loc_2"),
                (HazardType::Heat, "loc_1"),
                (HazardType::Heat, "loc_2"),
            ]
        );
    }

    #[test]
    fn test_location_filter() {
        // ---
        let readings = [
            create_test_reading("loc_1", 70.0, 0.0, 30.0, 50),
            create_test_reading("loc_2", 20.0, 0.0, 30.0, 50),
        ];

        let alerts = derive_alerts(
            &readings,
            &[HazardType::Flood],
            AlertStatus::Open,
            Some("loc_2"),
        );
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].location_id, "loc_2");
        assert_eq!(alerts[0].severity, Severity::Low);

        let alerts = derive_alerts(
            &readings,
            &HazardType::ALL,
            AlertStatus::Open,
            Some("loc_9"),
        );
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_status_is_echoed() {
        // ---
        let reading = create_test_reading("loc_1", 0.0, 0.0, 20.0, 40);
        let alerts = derive_alerts(&[reading], &HazardType::ALL, AlertStatus::Closed, None);
        assert!(alerts.iter().all(|a| a.status == AlertStatus::Closed));
        assert_eq!(AlertStatus::default(), AlertStatus::Open);
    }

    #[test]
    fn test_alert_ids_are_stable() {
        // ---
        let reading = create_test_reading("loc_1", 62.0, 28.0, 35.2, 76);
        let first = derive_alerts(
            std::slice::from_ref(&reading),
            &HazardType::ALL,
            AlertStatus::Open,
            None,
        );
        let second = derive_alerts(&[reading], &HazardType::ALL, AlertStatus::Closed, None);

        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[1].id, second[1].id);
        assert_ne!(first[0].id, first[1].id);
    }

    #[test]
    fn test_overall_severity_empty() {
        assert_eq!(overall_severity(&[]), Severity::Low);
    }

    #[test]
    fn test_alert_json_shape() {
        // ---
        let reading = create_test_reading("loc_1", 62.0, 28.0, 35.2, 76);
        let alerts = derive_alerts(&[reading], &[HazardType::Flood], AlertStatus::Open, None);
        let json = serde_json::to_value(&alerts[0]).unwrap();

        assert_eq!(json["hazard_type"], "FLOOD");
        assert_eq!(json["severity"], "HIGH");
        assert_eq!(json["status"], "open");
        assert_eq!(json["timestamp"], "2025-06-01T08:00:00Z");
    }
}
