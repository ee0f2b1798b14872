//! Stylist entity model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A stylist working at the salon. `portfolio_images` is an ordered list of
/// image references, stored as a JSON array and serialized as one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Stylist {
    pub id: Uuid,
    pub name: String,
    pub specialty: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub portfolio_images: Json<Vec<String>>,
}

impl Stylist {
    pub fn new(
        name: String,
        specialty: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        portfolio_images: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            specialty,
            email,
            phone,
            portfolio_images: Json(portfolio_images),
        }
    }
}
