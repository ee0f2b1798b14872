//! Client store over the shared SQLite pool

use sqlx::SqlitePool;
use uuid::Uuid;

use super::model::Client;
use crate::core::error::StoreError;
use crate::storage::map_delete_err;

#[derive(Clone)]
pub struct ClientStore {
    pool: SqlitePool,
}

impl ClientStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All clients in insertion order.
    pub async fn list(&self) -> Result<Vec<Client>, StoreError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, phone, email, created_at FROM clients ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(clients)
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Client, StoreError> {
        sqlx::query_as::<_, Client>(
            "SELECT id, name, phone, email, created_at FROM clients WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound {
            entity: "Client",
            id,
        })
    }

    pub async fn insert(&self, client: &Client) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO clients (id, name, phone, email, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(client.id)
        .bind(&client.name)
        .bind(&client.phone)
        .bind(&client.email)
        .bind(client.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Writes the mutable fields back. `created_at` is never touched.
    pub async fn update(&self, client: &Client) -> Result<(), StoreError> {
        sqlx::query("UPDATE clients SET name = ?, phone = ?, email = ? WHERE id = ?")
            .bind(&client.name)
            .bind(&client.phone)
            .bind(&client.email)
            .bind(client.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Deletes the client. Fails with `InUse` while appointments still
    /// reference it.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_delete_err("Client", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Client",
                id,
            });
        }
        Ok(())
    }
}
