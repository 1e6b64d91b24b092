//! Data models for sensor readings.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::locations;

// ---

/// One stored sensor sample. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Reading {
    // ---
    pub location_id: String,
    pub device_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub water_level_cm: f64,
    pub temp_c: f64,
    pub humidity: i32,
    pub rainfall_mm: f64,
    pub salinity: f64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Ingestion payload posted by a sensor gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReading {
    // ---
    pub location_id: String,
    #[serde(default)]
    pub device_id: Option<String>,
    pub water_level_cm: f64,
    pub temp_c: f64,
    #[serde(default)]
    pub humidity: i32,
    #[serde(default)]
    pub rainfall_mm: f64,
    #[serde(default)]
    pub salinity: f64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl NewReading {
    // ---
    /// Validate the payload and stamp it with the ingestion time.
    pub fn into_reading(self, received_at: DateTime<Utc>) -> Result<Reading> {
        // ---
        self.validate()?;

        Ok(Reading {
            location_id: self.location_id,
            device_id: self.device_id,
            timestamp: received_at,
            water_level_cm: self.water_level_cm,
            temp_c: self.temp_c,
            humidity: self.humidity,
            rainfall_mm: self.rainfall_mm,
            salinity: self.salinity,
            lat: self.lat,
            lon: self.lon,
        })
    }

    fn validate(&self) -> Result<()> {
        // ---
        if locations::find(&self.location_id).is_none() {
            bail!("unknown location_id '{}'", self.location_id);
        }

        let numeric = [
            ("water_level_cm", self.water_level_cm),
            ("temp_c", self.temp_c),
            ("rainfall_mm", self.rainfall_mm),
            ("salinity", self.salinity),
        ];
        if let Some((name, _)) = numeric.iter().find(|(_, v)| !v.is_finite()) {
            bail!("{} must be a finite number", name);
        }
        if self.lat.is_some_and(|v| !v.is_finite()) || self.lon.is_some_and(|v| !v.is_finite()) {
            bail!("lat/lon must be finite numbers");
        }

        if self.water_level_cm < 0.0 {
            bail!("water_level_cm must be >= 0, got {}", self.water_level_cm);
        }
        if self.rainfall_mm < 0.0 {
            bail!("rainfall_mm must be >= 0, got {}", self.rainfall_mm);
        }
        if !(0..=100).contains(&self.humidity) {
            bail!("humidity must be within 0..=100, got {}", self.humidity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::TimeZone;

    fn create_test_payload() -> NewReading {
        // ---
        serde_json::from_value(serde_json::json!({
            "location_id": "loc_1",
            "device_id": "sensor-07",
            "water_level_cm": 38.2,
            "temp_c": 33.1,
            "humidity": 78,
            "rainfall_mm": 12.4
        }))
        .unwrap()
    }

    fn received_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_payload_defaults() {
        // ---
        let payload: NewReading = serde_json::from_value(serde_json::json!({
            "location_id": "loc_2",
            "water_level_cm": 5.0,
            "temp_c": 28.0
        }))
        .unwrap();

        assert_eq!(payload.humidity, 0);
        assert_eq!(payload.rainfall_mm, 0.0);
        assert_eq!(payload.salinity, 0.0);
        assert!(payload.device_id.is_none());
        assert!(payload.lat.is_none());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        // ---
        let result: Result<NewReading, _> = serde_json::from_value(serde_json::json!({
            "location_id": "loc_1",
            "temp_c": 28.0
        }));
        assert!(result.is_err());

        let result: Result<NewReading, _> = serde_json::from_value(serde_json::json!({
            "location_id": "loc_1",
            "water_level_cm": "high",
            "temp_c": 28.0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_into_reading_preserves_fields() {
        // ---
        let reading = create_test_payload().into_reading(received_at()).unwrap();

        assert_eq!(reading.location_id, "loc_1");
        assert_eq!(reading.device_id.as_deref(), Some("sensor-07"));
        assert_eq!(reading.timestamp, received_at());
        assert_eq!(reading.water_level_cm, 38.2);
        assert_eq!(reading.temp_c, 33.1);
        assert_eq!(reading.humidity, 78);
        assert_eq!(reading.rainfall_mm, 12.4);
        assert_eq!(reading.salinity, 0.0);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        // ---
        let mut unknown = create_test_payload();
        unknown.location_id = "loc_404".to_string();
        assert!(unknown.into_reading(received_at()).is_err());

        let mut negative = create_test_payload();
        negative.water_level_cm = -1.0;
        assert!(negative.into_reading(received_at()).is_err());

        let mut rain = create_test_payload();
        rain.rainfall_mm = -0.5;
        assert!(rain.into_reading(received_at()).is_err());

        let mut humid = create_test_payload();
        humid.humidity = 101;
        assert!(humid.into_reading(received_at()).is_err());

        let mut nan = create_test_payload();
        nan.temp_c = f64::NAN;
        assert!(nan.into_reading(received_at()).is_err());
    }

    #[test]
    fn test_validation_accepts_boundaries() {
        // ---
        let mut edge = create_test_payload();
        edge.water_level_cm = 0.0;
        edge.rainfall_mm = 0.0;
        edge.humidity = 100;
        edge.temp_c = -5.0;
        assert!(edge.into_reading(received_at()).is_ok());
    }
}
