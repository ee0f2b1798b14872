//! Service store over the shared SQLite pool

use sqlx::SqlitePool;
use uuid::Uuid;

use super::model::Service;
use crate::core::error::StoreError;
use crate::storage::map_delete_err;

#[derive(Clone)]
pub struct ServiceStore {
    pool: SqlitePool,
}

impl ServiceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All services in insertion order.
    pub async fn list(&self) -> Result<Vec<Service>, StoreError> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT id, name, duration, price FROM services ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(services)
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Service, StoreError> {
        sqlx::query_as::<_, Service>("SELECT id, name, duration, price FROM services WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "Service",
                id,
            })
    }

    pub async fn insert(&self, service: &Service) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO services (id, name, duration, price) VALUES (?, ?, ?, ?)")
            .bind(service.id)
            .bind(&service.name)
            .bind(service.duration)
            .bind(service.price)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn update(&self, service: &Service) -> Result<(), StoreError> {
        sqlx::query("UPDATE services SET name = ?, duration = ?, price = ? WHERE id = ?")
            .bind(&service.name)
            .bind(service.duration)
            .bind(service.price)
            .bind(service.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Deletes the service. Fails with `InUse` while appointments still
    /// reference it.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_err("Service", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Service",
                id,
            });
        }
        Ok(())
    }
}
