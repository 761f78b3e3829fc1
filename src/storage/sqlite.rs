use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};

use super::{MIGRATION_001_STATE, StateStore};

/// State store persisting entries in a single SQLite table.
pub struct SqliteStateStore {
    pool: SqlitePool,
}

impl SqliteStateStore {
    /// Create a new store with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database.
    /// Use a `?mode=rwc` URL to create the file if it doesn't exist.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(MIGRATION_001_STATE)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a database (connect + migrate).
    pub async fn init(database_url: &str) -> Result<Self> {
        let store = Self::connect(database_url).await?;
        store.migrate().await?;
        Ok(store)
    }
}

const UPSERT: &str = r#"
    INSERT INTO state (key, value)
    VALUES (?, ?)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value
"#;

impl StateStore for SqliteStateStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let row = sqlx::query("SELECT value FROM state WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to fetch state for {}", key))?;

        Ok(row.map(|row| row.get::<Vec<u8>, _>("value")))
    }

    async fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        sqlx::query(UPSERT)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to put state for {}", key))?;
        Ok(())
    }

    /// All entries are written in one transaction; on any failure none of
    /// them is visible.
    async fn put_batch(&self, entries: &[(String, Vec<u8>)]) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        for (key, value) in entries {
            sqlx::query(UPSERT)
                .bind(key.as_str())
                .bind(value.as_slice())
                .execute(&mut *tx)
                .await
                .with_context(|| format!("Failed to put state for {}", key))?;
        }

        tx.commit().await.context("Failed to commit transaction")?;
        Ok(())
    }
}
