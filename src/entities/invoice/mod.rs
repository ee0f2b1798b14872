//! Invoice entity module

pub mod handlers;
pub mod model;
pub mod store;

pub use model::Invoice;
pub use store::InvoiceStore;

use axum::Router;
use axum::routing::{get, put};

use crate::server::AppState;

/// CRUD routes for the `/invoices` collection.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/invoices",
            get(handlers::list_invoices).post(handlers::create_invoice),
        )
        .route(
            "/invoices/{id}",
            put(handlers::update_invoice).delete(handlers::delete_invoice),
        )
}
