//! Stylist store over the shared SQLite pool

use sqlx::SqlitePool;
use uuid::Uuid;

use super::model::Stylist;
use crate::core::error::StoreError;
use crate::storage::map_delete_err;

#[derive(Clone)]
pub struct StylistStore {
    pool: SqlitePool,
}

impl StylistStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All stylists in insertion order.
    pub async fn list(&self) -> Result<Vec<Stylist>, StoreError> {
        let stylists = sqlx::query_as::<_, Stylist>(
            "SELECT id, name, specialty, email, phone, portfolio_images
             FROM stylists ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stylists)
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Stylist, StoreError> {
        sqlx::query_as::<_, Stylist>(
            "SELECT id, name, specialty, email, phone, portfolio_images
             FROM stylists WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound {
            entity: "Stylist",
            id,
        })
    }

    pub async fn insert(&self, stylist: &Stylist) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO stylists (id, name, specialty, email, phone, portfolio_images)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(stylist.id)
        .bind(&stylist.name)
        .bind(&stylist.specialty)
        .bind(&stylist.email)
        .bind(&stylist.phone)
        .bind(&stylist.portfolio_images)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn update(&self, stylist: &Stylist) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE stylists
             SET name = ?, specialty = ?, email = ?, phone = ?, portfolio_images = ?
             WHERE id = ?",
        )
        .bind(&stylist.name)
        .bind(&stylist.specialty)
        .bind(&stylist.email)
        .bind(&stylist.phone)
        .bind(&stylist.portfolio_images)
        .bind(stylist.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Deletes the stylist. Fails with `InUse` while appointments still
    /// reference them.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM stylists WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_err("Stylist", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Stylist",
                id,
            });
        }
        Ok(())
    }
}
