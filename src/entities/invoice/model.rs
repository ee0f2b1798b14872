//! Invoice entity model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The bill for one appointment (1:1). `paid_at` is assigned by the server
/// at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: Uuid,
    pub appointment_id: Uuid,
    pub total_amount: f64,
    pub payment_method: Option<String>,
    pub paid_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(appointment_id: Uuid, total_amount: f64, payment_method: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            appointment_id,
            total_amount,
            payment_method,
            paid_at: Utc::now(),
        }
    }
}
