//! Invoice store over the shared SQLite pool
//!
//! `appointment_id` carries both a foreign key and a unique constraint, so
//! inserts distinguish a dangling reference (400) from a second invoice for
//! the same appointment (409).

use sqlx::SqlitePool;
use uuid::Uuid;

use super::model::Invoice;
use crate::core::error::StoreError;

#[derive(Clone)]
pub struct InvoiceStore {
    pool: SqlitePool,
}

impl InvoiceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All invoices in insertion order.
    pub async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT id, appointment_id, total_amount, payment_method, paid_at
             FROM invoices ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(invoices)
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Invoice, StoreError> {
        sqlx::query_as::<_, Invoice>(
            "SELECT id, appointment_id, total_amount, payment_method, paid_at
             FROM invoices WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound {
            entity: "Invoice",
            id,
        })
    }

    pub async fn insert(&self, invoice: &Invoice) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO invoices (id, appointment_id, total_amount, payment_method, paid_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(invoice.id)
        .bind(invoice.appointment_id)
        .bind(invoice.total_amount)
        .bind(&invoice.payment_method)
        .bind(invoice.paid_at)
        .execute(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateInvoice,
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                StoreError::MissingReference { entity: "Invoice" }
            }
            _ => StoreError::Database(err),
        })?;
        Ok(())
    }

    /// Writes the mutable fields back. `appointment_id` and `paid_at` are
    /// fixed at creation.
    pub async fn update(&self, invoice: &Invoice) -> Result<(), StoreError> {
        sqlx::query("UPDATE invoices SET total_amount = ?, payment_method = ? WHERE id = ?")
            .bind(invoice.total_amount)
            .bind(&invoice.payment_method)
            .bind(invoice.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Deletes the invoice. Nothing references invoices, so this only fails
    /// when the row is gone already.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Invoice",
                id,
            });
        }
        Ok(())
    }
}
