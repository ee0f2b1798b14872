//! Service entity module

pub mod handlers;
pub mod model;
pub mod store;

pub use model::Service;
pub use store::ServiceStore;

use axum::Router;
use axum::routing::{get, put};

use crate::server::AppState;

/// CRUD routes for the `/services` collection.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/services",
            get(handlers::list_services).post(handlers::create_service),
        )
        .route(
            "/services/{id}",
            put(handlers::update_service).delete(handlers::delete_service),
        )
}
