//! Appointment entity model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A booking tying a client, a stylist and a service together at a date and
/// time. `status` is a free-form string, `"booked"` by default.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
}

impl Appointment {
    pub fn new(
        client_id: Uuid,
        stylist_id: Uuid,
        service_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
        status: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id,
            stylist_id,
            service_id,
            date,
            time,
            status,
        }
    }
}
