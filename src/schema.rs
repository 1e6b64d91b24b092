//! Database schema management for `urbanresq`.
//!
//! Ensures required tables and indexes exist before serving requests.
//! Applied once on startup from `main.rs` (EMBP: single gateway call).

use anyhow::Result;
use sqlx::PgPool;

// ---

/// Create or update the database schema (idempotent).
///
/// Creates the append-only `readings` table. Safe to call on every startup;
/// no-op if objects already exist.
///
/// Errors are propagated if any SQL execution fails.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    // ---
    let mut tx = pool.begin().await?;

    // One row per ingested sample, never updated
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS readings (
            id               BIGSERIAL PRIMARY KEY,
            location_id      TEXT             NOT NULL,
            device_id        TEXT,
            timestamp        TIMESTAMPTZ      NOT NULL,
            water_level_cm   DOUBLE PRECISION NOT NULL DEFAULT 0,
            temp_c           DOUBLE PRECISION NOT NULL DEFAULT 0,
            humidity         INTEGER          NOT NULL DEFAULT 0,
            rainfall_mm      DOUBLE PRECISION NOT NULL DEFAULT 0,
            salinity         DOUBLE PRECISION NOT NULL DEFAULT 0,
            lat              DOUBLE PRECISION,
            lon              DOUBLE PRECISION
        );
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // Latest-by-location and history windows both scan this index
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_readings_location_ts
            ON readings (location_id, timestamp DESC);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_readings_device_id
            ON readings (device_id);
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}
