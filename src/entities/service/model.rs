//! Service entity model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable salon service. `duration` is in minutes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub duration: Option<i64>,
    pub price: Option<f64>,
}

impl Service {
    pub fn new(name: String, duration: Option<i64>, price: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            duration,
            price,
        }
    }
}
