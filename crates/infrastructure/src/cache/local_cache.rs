use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::{Pool, Sqlite, sqlite::SqlitePoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::warn;

/// Storage keys, one JSON document per collection.
/// Bump the suffix when the document shape changes.
pub mod keys {
    pub const RESERVATIONS: &str = "facility.reservations.v2";
    pub const EQUIPMENT: &str = "facility.equipment.v2";
    pub const EQUIPMENT_BLACKLIST: &str = "facility.equipment_blacklist.v1";
    pub const MAINTENANCE: &str = "facility.maintenance.v1";
    pub const SAFETY: &str = "facility.safety.v1";
}

/// Key-value store backing offline mode.
#[derive(Clone)]
pub struct LocalCache {
    pool: Pool<Sqlite>,
    // Serializes read-modify-write cycles on whole documents
    write_lock: Arc<Mutex<()>>,
}

impl LocalCache {
    pub async fn new(connection_string: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1) // SQLite is single-writer
            .min_connections(1)
            // An in-memory database lives exactly as long as its connection
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect(connection_string)
            .await?;

        // Initialize table
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS kv_cache (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub async fn in_memory() -> Result<Self> {
        Self::new("sqlite::memory:").await
    }

    pub async fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_cache WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    pub async fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO kv_cache (key, value, updated_at) VALUES (?, ?, strftime('%s','now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Decode the document under `key`. A missing or undecodable document
    /// yields `default()`; only storage failures are errors.
    pub async fn load<T, F>(&self, key: &str, default: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let Some(raw) = self.get_raw(key).await? else {
            return Ok(default());
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(key = %key, "Failed to decode cached document, using default: {}", e);
                Ok(default())
            }
        }
    }

    pub async fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw).await
    }

    /// Load, modify and write back the document under `key` as one step.
    pub async fn update<T, R, D, F>(&self, key: &str, default: D, apply: F) -> Result<R>
    where
        T: Serialize + DeserializeOwned,
        D: FnOnce() -> T,
        F: FnOnce(&mut T) -> R,
    {
        let _guard = self.write_lock.lock().await;
        let mut value = self.load(key, default).await?;
        let result = apply(&mut value);
        self.store(key, &value).await?;
        Ok(result)
    }
}
