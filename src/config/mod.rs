//! Environment-driven configuration

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to bind (`SALON_PORT`, default 3000).
    pub port: u16,
    /// sqlx SQLite URL (`SALON_DATABASE_URL`, default `sqlite://salon.db`).
    /// The database file is created when missing.
    pub database_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("SALON_PORT", 3000),
            database_url: env::var("SALON_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://salon.db".to_string()),
        }
    }
}

/// Reads and parses an environment variable, falling back to the default on
/// a missing variable or an unparseable value.
fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value ({e}), using default {default}");
            default
        }),
        Err(_) => default,
    }
}
