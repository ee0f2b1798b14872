//! Client entity module

pub mod handlers;
pub mod model;
pub mod store;

pub use model::Client;
pub use store::ClientStore;

use axum::Router;
use axum::routing::{get, put};

use crate::server::AppState;

/// CRUD routes for the `/clients` collection.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route(
            "/clients/{id}",
            put(handlers::update_client).delete(handlers::delete_client),
        )
}
