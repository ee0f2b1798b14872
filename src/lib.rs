//! # Salon Backend
//!
//! A salon management backend exposing a REST API over five related
//! entities: clients, stylists, services, appointments and invoices,
//! persisted in SQLite.
//!
//! ## Features
//!
//! - **Full CRUD** per entity: list, create, partial update, delete
//! - **Referential integrity** at the storage layer: appointments reference
//!   a client, stylist and service; each appointment has at most one invoice
//! - **Restrict deletes**: rows still referenced by dependents are kept
//! - **Field validation** with stable, client-facing messages (required
//!   fields, email/phone formats, date/time parsing)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salon::config::Config;
//! use salon::server::{AppState, build_router, serve};
//! use salon::storage::SalonStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load();
//!     let store = SalonStore::connect(&config.database_url).await?;
//!     let app = build_router(AppState { store });
//!     serve(app, config.port).await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

pub use crate::core::error::{ApiError, ApiResult, StoreError, ValidationError};
pub use crate::server::{AppState, build_router, serve};
pub use crate::storage::SalonStore;
