//! Appointment store over the shared SQLite pool
//!
//! Inserts and updates run against `NOT NULL REFERENCES` columns, so a
//! dangling client/stylist/service reference surfaces as `MissingReference`.

use sqlx::SqlitePool;
use uuid::Uuid;

use super::model::Appointment;
use crate::core::error::StoreError;
use crate::storage::{map_delete_err, map_write_err};

#[derive(Clone)]
pub struct AppointmentStore {
    pool: SqlitePool,
}

impl AppointmentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All appointments in insertion order.
    pub async fn list(&self) -> Result<Vec<Appointment>, StoreError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT id, client_id, stylist_id, service_id, date, time, status
             FROM appointments ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(appointments)
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Appointment, StoreError> {
        sqlx::query_as::<_, Appointment>(
            "SELECT id, client_id, stylist_id, service_id, date, time, status
             FROM appointments WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound {
            entity: "Appointment",
            id,
        })
    }

    pub async fn insert(&self, appointment: &Appointment) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO appointments (id, client_id, stylist_id, service_id, date, time, status)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(appointment.id)
        .bind(appointment.client_id)
        .bind(appointment.stylist_id)
        .bind(appointment.service_id)
        .bind(appointment.date)
        .bind(appointment.time)
        .bind(&appointment.status)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_err("Appointment", e))?;
        Ok(())
    }

    /// Writes the mutable fields back. `client_id` and `stylist_id` are
    /// fixed at creation; `service_id` may be rebooked.
    pub async fn update(&self, appointment: &Appointment) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE appointments SET date = ?, time = ?, status = ?, service_id = ? WHERE id = ?",
        )
        .bind(appointment.date)
        .bind(appointment.time)
        .bind(&appointment.status)
        .bind(appointment.service_id)
        .bind(appointment.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_err("Appointment", e))?;
        Ok(())
    }

    /// Deletes the appointment. Fails with `InUse` while an invoice still
    /// references it.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_err("Appointment", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Appointment",
                id,
            });
        }
        Ok(())
    }
}
