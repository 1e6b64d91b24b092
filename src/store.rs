//! Reading store backed by the `readings` table.
//!
//! "No reading for this location" is reported as `Ok(None)` / an empty
//! vector. Callers decide how to surface it; nothing here fabricates data.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;

use crate::Reading;

// ---

const READING_COLUMNS: &str = "location_id, device_id, timestamp, water_level_cm, temp_c, \
                               humidity, rainfall_mm, salinity, lat, lon";

/// Append a reading.
pub async fn insert_reading(pool: &PgPool, reading: &Reading) -> Result<()> {
    // ---
    sqlx::query(
        r#"
        INSERT INTO readings (
            location_id, device_id, timestamp,
            water_level_cm, temp_c, humidity, rainfall_mm, salinity,
            lat, lon
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(&reading.location_id)
    .bind(&reading.device_id)
    .bind(reading.timestamp)
    .bind(reading.water_level_cm)
    .bind(reading.temp_c)
    .bind(reading.humidity)
    .bind(reading.rainfall_mm)
    .bind(reading.salinity)
    .bind(reading.lat)
    .bind(reading.lon)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to insert reading for '{}'", reading.location_id))?;

    Ok(())
}

/// Most recent reading for a location, if any.
pub async fn latest_reading(pool: &PgPool, location_id: &str) -> Result<Option<Reading>> {
    // ---
    let sql = format!(
        "SELECT {READING_COLUMNS} FROM readings \
         WHERE location_id = $1 \
         ORDER BY timestamp DESC, id DESC \
         LIMIT 1"
    );

    let reading = sqlx::query_as::<_, Reading>(&sql)
        .bind(location_id)
        .fetch_optional(pool)
        .await
        .with_context(|| format!("Failed to load latest reading for '{location_id}'"))?;

    Ok(reading)
}

/// Readings for a location within the last `hours`, newest first, at most
/// `limit` rows.
pub async fn reading_history(
    pool: &PgPool,
    location_id: &str,
    hours: u32,
    limit: u32,
) -> Result<Vec<Reading>> {
    // ---
    let since = history_cutoff(Utc::now(), hours);
    let sql = format!(
        "SELECT {READING_COLUMNS} FROM readings \
         WHERE location_id = $1 AND timestamp >= $2 \
         ORDER BY timestamp DESC, id DESC \
         LIMIT $3"
    );

    let readings = sqlx::query_as::<_, Reading>(&sql)
        .bind(location_id)
        .bind(since)
        .bind(i64::from(limit))
        .fetch_all(pool)
        .await
        .with_context(|| format!("Failed to load reading history for '{location_id}'"))?;

    Ok(readings)
}

/// Start of a history window ending at `now`.
fn history_cutoff(now: DateTime<Utc>, hours: u32) -> DateTime<Utc> {
    now - Duration::hours(i64::from(hours))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_history_cutoff() {
        // ---
        let now = Utc.with_ymd_and_hms(2025, 6, 8, 12, 0, 0).unwrap();
        assert_eq!(
            history_cutoff(now, 24),
            Utc.with_ymd_and_hms(2025, 6, 7, 12, 0, 0).unwrap()
        );
        assert_eq!(
            history_cutoff(now, 168),
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
        );
    }
}
