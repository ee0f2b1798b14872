//! Client entity model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A salon customer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Creates a client with a fresh ID and the current creation time.
    pub fn new(name: String, phone: Option<String>, email: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            email,
            created_at: Utc::now(),
        }
    }
}
