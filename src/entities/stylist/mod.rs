//! Stylist entity module

pub mod handlers;
pub mod model;
pub mod store;

pub use model::Stylist;
pub use store::StylistStore;

use axum::Router;
use axum::routing::{get, put};

use crate::server::AppState;

/// CRUD routes for the `/stylists` collection.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/stylists",
            get(handlers::list_stylists).post(handlers::create_stylist),
        )
        .route(
            "/stylists/{id}",
            put(handlers::update_stylist).delete(handlers::delete_stylist),
        )
}
