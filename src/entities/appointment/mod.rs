//! Appointment entity module

pub mod handlers;
pub mod model;
pub mod store;

pub use model::Appointment;
pub use store::AppointmentStore;

use axum::Router;
use axum::routing::{get, put};

use crate::server::AppState;

/// CRUD routes for the `/appointments` collection.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/appointments",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route(
            "/appointments/{id}",
            put(handlers::update_appointment).delete(handlers::delete_appointment),
        )
}
