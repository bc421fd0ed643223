//! Store gateway for the `items` table. Every operation is a single parameterized statement;
//! update/delete rely on the affected-row count to detect a missing row.

use crate::error::StoreError;
use crate::model::Item;
use async_trait::async_trait;
use sqlx::PgPool;
use std::future::Future;
use std::time::Duration;

const ITEMS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
"#;

/// Data access seam used by the handlers. `PgItemStore` is the production implementation.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a row and return the store-generated id.
    async fn create(&self, name: &str) -> Result<i64, StoreError>;

    /// All rows ordered by ascending id.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    async fn get(&self, id: i64) -> Result<Item, StoreError>;

    async fn update(&self, id: i64, name: &str) -> Result<(), StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Liveness check.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Run a store future under `deadline`. On expiry the future is dropped, which abandons
/// the in-flight statement and returns its connection to the pool.
pub async fn with_deadline<T, F>(deadline: Duration, fut: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(res) => res,
        Err(_) => Err(StoreError::Timeout(deadline)),
    }
}

#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        PgItemStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `items` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(ITEMS_DDL).execute(&self.pool).await?;
        Ok(())
    }
}

/// Map the affected-row count of an update/delete to existence.
fn require_affected(rows_affected: u64) -> Result<(), StoreError> {
    if rows_affected == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

// Ids are cast to BIGINT so tables created with SERIAL decode into i64 as well.
#[async_trait]
impl ItemStore for PgItemStore {
    async fn create(&self, name: &str) -> Result<i64, StoreError> {
        tracing::debug!(name = %name, "insert item");
        let (id,): (i64,) = sqlx::query_as("INSERT INTO items (name) VALUES ($1) RETURNING id::BIGINT")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let items = sqlx::query_as::<_, Item>("SELECT id::BIGINT AS id, name FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn get(&self, id: i64) -> Result<Item, StoreError> {
        sqlx::query_as::<_, Item>("SELECT id::BIGINT AS id, name FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: i64, name: &str) -> Result<(), StoreError> {
        let res = sqlx::query("UPDATE items SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        require_affected(res.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let res = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        require_affected(res.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
