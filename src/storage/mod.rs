//! SQLite persistence for the salon backend
//!
//! One `SqlitePool` shared by five per-entity stores. The schema is
//! bootstrapped on connect (idempotent `CREATE TABLE IF NOT EXISTS`) and
//! foreign keys are enforced on every connection, so referential integrity
//! and the one-invoice-per-appointment rule live in the database itself.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::core::error::StoreError;
use crate::entities::appointment::AppointmentStore;
use crate::entities::client::ClientStore;
use crate::entities::invoice::InvoiceStore;
use crate::entities::service::ServiceStore;
use crate::entities::stylist::StylistStore;

/// UUID columns are BLOBs; date, time and datetime columns are TEXT in the
/// formats chrono writes; `portfolio_images` is a JSON array stored as TEXT.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS clients (
    id         BLOB PRIMARY KEY,
    name       TEXT NOT NULL,
    phone      TEXT,
    email      TEXT,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS stylists (
    id               BLOB PRIMARY KEY,
    name             TEXT NOT NULL,
    specialty        TEXT,
    email            TEXT,
    phone            TEXT,
    portfolio_images TEXT NOT NULL DEFAULT '[]'
);

CREATE TABLE IF NOT EXISTS services (
    id       BLOB PRIMARY KEY,
    name     TEXT NOT NULL,
    duration INTEGER,
    price    REAL
);

CREATE TABLE IF NOT EXISTS appointments (
    id         BLOB PRIMARY KEY,
    client_id  BLOB NOT NULL REFERENCES clients(id),
    stylist_id BLOB NOT NULL REFERENCES stylists(id),
    service_id BLOB NOT NULL REFERENCES services(id),
    date       TEXT NOT NULL,
    time       TEXT NOT NULL,
    status     TEXT NOT NULL DEFAULT 'booked'
);

CREATE TABLE IF NOT EXISTS invoices (
    id             BLOB PRIMARY KEY,
    appointment_id BLOB NOT NULL UNIQUE REFERENCES appointments(id),
    total_amount   REAL NOT NULL,
    payment_method TEXT,
    paid_at        TEXT NOT NULL
);
"#;

/// Aggregated store handle injected into request handlers via `AppState`.
#[derive(Clone)]
pub struct SalonStore {
    pub clients: ClientStore,
    pub stylists: StylistStore,
    pub services: ServiceStore,
    pub appointments: AppointmentStore,
    pub invoices: InvoiceStore,
}

impl SalonStore {
    /// Opens the database at `url` (creating the file if missing) and
    /// bootstraps the schema. WAL mode plus a busy timeout keep concurrent
    /// pool connections from failing spuriously.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::bootstrap(pool).await
    }

    /// Opens a private in-memory database. The pool is capped at one
    /// connection that is never reclaimed: every in-memory connection is its
    /// own database, so losing the connection would lose the data.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::bootstrap(pool).await
    }

    async fn bootstrap(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::raw_sql(SCHEMA).execute(&pool).await?;
        tracing::debug!("database schema ready");

        Ok(Self {
            clients: ClientStore::new(pool.clone()),
            stylists: StylistStore::new(pool.clone()),
            services: ServiceStore::new(pool.clone()),
            appointments: AppointmentStore::new(pool.clone()),
            invoices: InvoiceStore::new(pool),
        })
    }
}

/// Maps an insert/update failure. A foreign-key violation here means the
/// written row references a missing parent.
pub(crate) fn map_write_err(entity: &'static str, err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            StoreError::MissingReference { entity }
        }
        _ => StoreError::Database(err),
    }
}

/// Maps a delete failure. A foreign-key violation here means dependent rows
/// still reference the deleted one (restrict policy).
pub(crate) fn map_delete_err(entity: &'static str, err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            StoreError::InUse { entity }
        }
        _ => StoreError::Database(err),
    }
}
