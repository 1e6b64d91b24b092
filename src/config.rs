//! Configuration loader for the `urbanresq` backend service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). Handlers receive the loaded [`Config`] through
//! router state instead of calling `env::var` themselves.
//!
use std::env;

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u32 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u32>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse a required string environment variable.
macro_rules! require_env {
    ($var_name:expr) => {
        env::var($var_name)
            .map_err(|_| anyhow!("{} must be set in .env or environment", $var_name))?
    };
}

/// Allowed range for the `hours` history window.
pub const HISTORY_HOURS_RANGE: (u32, u32) = (1, 168);

/// Allowed range for the `limit` history parameter.
pub const HISTORY_LIMIT_RANGE: (u32, u32) = (1, 500);

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// PostgreSQL connection string.
    pub db_url: String,

    /// Maximum number of database connections in the pool.
    pub db_pool_max: u32,

    /// TCP port the HTTP server binds on all interfaces.
    pub listen_port: u16,

    /// History window (hours) used when a request omits `hours`.
    pub history_default_hours: u32,

    /// History size used when a request omits `limit`.
    pub history_default_limit: u32,
}

/// Load configuration from environment variables with defaults.
///
/// Required:
/// - `DATABASE_URL` – PostgreSQL connection string
///
/// Optional:
/// - `DB_POOL_MAX` – max DB connections (default: 5)
/// - `LISTEN_PORT` – HTTP port (default: 8080)
/// - `HISTORY_DEFAULT_HOURS` – default history window, 1..=168 (default: 24)
/// - `HISTORY_DEFAULT_LIMIT` – default history size, 1..=500 (default: 100)
///
/// Returns an error if any required variable is missing or invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let db_url = require_env!("DATABASE_URL");
    let db_pool_max = parse_env_u32!("DB_POOL_MAX", 5);
    let listen_port = parse_env_u32!("LISTEN_PORT", 8080);
    let history_default_hours = parse_env_u32!("HISTORY_DEFAULT_HOURS", 24);
    let history_default_limit = parse_env_u32!("HISTORY_DEFAULT_LIMIT", 100);

    let listen_port = u16::try_from(listen_port)
        .map_err(|_| anyhow!("Invalid LISTEN_PORT: {} is out of range", listen_port))?;
    check_range(
        "HISTORY_DEFAULT_HOURS",
        history_default_hours,
        HISTORY_HOURS_RANGE,
    )?;
    check_range(
        "HISTORY_DEFAULT_LIMIT",
        history_default_limit,
        HISTORY_LIMIT_RANGE,
    )?;

    Ok(Config {
        db_url,
        db_pool_max,
        listen_port,
        history_default_hours,
        history_default_limit,
    })
}

/// Ensure `value` lies within the inclusive `(min, max)` range.
pub fn check_range(name: &str, value: u32, (min, max): (u32, u32)) -> Result<()> {
    // ---
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(anyhow!(
            "{} must be within {}..={}, got {}",
            name,
            min,
            max,
            value
        ))
    }
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    ///
    /// Masks the database password while showing all other values.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  DATABASE_URL          : {}", self.masked_db_url());
        tracing::info!("  DB_POOL_MAX           : {}", self.db_pool_max);
        tracing::info!("  LISTEN_PORT           : {}", self.listen_port);
        tracing::info!("  HISTORY_DEFAULT_HOURS : {}", self.history_default_hours);
        tracing::info!("  HISTORY_DEFAULT_LIMIT : {}", self.history_default_limit);
    }

    /// Database URL with the password replaced by `****`.
    pub fn masked_db_url(&self) -> String {
        // ---
        if let Some(at_pos) = self.db_url.rfind('@') {
            if let Some(colon_pos) = self.db_url[..at_pos].rfind(':') {
                // `postgres://host@...` has only the scheme colon before '@'
                if !self.db_url[colon_pos + 1..at_pos].starts_with("//") {
                    return format!(
                        "{}:****{}",
                        &self.db_url[..colon_pos],
                        &self.db_url[at_pos..]
                    );
                }
            }
        }
        self.db_url.clone()
    }
}
