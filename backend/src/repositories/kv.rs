//! Key-value store abstraction
//!
//! All persistence goes through [`KvStore`]: flat string keys mapped to JSON
//! documents, with prefix scans as the only query mechanism. Every log
//! collection of a user lives under its own prefix, so listing a
//! collection is a single scan.
//!
//! Prefix scans read the whole collection on every call. That is fine for
//! one user's history but does not scale to large logs.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::PgPool;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Flat JSON document store
///
/// Writes are last-writer-wins per key. There are no transactions.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    async fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Write only if the key does not exist yet. Returns whether it wrote.
    async fn set_if_absent(&self, key: &str, value: Value) -> Result<bool>;

    /// Remove a key. Missing keys are not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// All values whose key starts with `prefix`, in key order
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>>;

    async fn health_check(&self) -> Result<()>;
}

// ============================================================================
// Key scheme
// ============================================================================

/// Per-user append-only collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Workout,
    Food,
    Weight,
    Chat,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Workout => "workout",
            Collection::Food => "food",
            Collection::Weight => "weight",
            Collection::Chat => "chat",
        }
    }
}

pub mod keys {
    use super::Collection;
    use uuid::Uuid;

    pub const WORKOUT_LIBRARY: &str = "workouts:library";

    pub fn profile(user_id: Uuid) -> String {
        format!("user:{}:profile", user_id)
    }

    pub fn account(user_id: Uuid) -> String {
        format!("user:{}:account", user_id)
    }

    /// Emails are matched case-insensitively
    pub fn account_email(email: &str) -> String {
        format!("auth:email:{}", email.trim().to_lowercase())
    }

    pub fn collection_prefix(user_id: Uuid, collection: Collection) -> String {
        format!("user:{}:{}:", user_id, collection.as_str())
    }

    pub fn entry(user_id: Uuid, collection: Collection, log_id: &str) -> String {
        format!("{}{}", collection_prefix(user_id, collection), log_id)
    }
}

/// Id for a new log entry: `{userId}:{unixMillis}-{8 hex}`
///
/// The random suffix keeps two writes in the same millisecond apart.
pub fn new_log_id(user_id: Uuid) -> String {
    format!(
        "{}:{}-{:08x}",
        user_id,
        Utc::now().timestamp_millis(),
        rand::random::<u32>()
    )
}

// ============================================================================
// Postgres
// ============================================================================

/// `kv_store` table on Postgres, values as JSONB
#[derive(Clone)]
pub struct PgKvStore {
    pool: PgPool,
}

impl PgKvStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape `LIKE` wildcards so a prefix matches literally
fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl KvStore for PgKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let value = sqlx::query_scalar::<_, Value>("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("kv get {}", key))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .with_context(|| format!("kv set {}", key))?;
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: Value) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO kv_store (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO NOTHING
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .with_context(|| format!("kv set_if_absent {}", key))?;
        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM kv_store WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .with_context(|| format!("kv delete {}", key))?;
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>> {
        let values = sqlx::query_scalar::<_, Value>(
            r#"
            SELECT value FROM kv_store
            WHERE key LIKE $1 ESCAPE '\'
            ORDER BY key
            "#,
        )
        .bind(like_prefix(prefix))
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("kv prefix scan {}", prefix))?;
        Ok(values)
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("database health check failed")?;
        Ok(())
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Ordered in-process map; for tests and throwaway local runs
#[derive(Default)]
pub struct MemoryKvStore {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: Value) -> Result<bool> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(key) {
            return Ok(false);
        }
        entries.insert(key.to_string(), value);
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>> {
        let entries = self.entries.read().await;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(_, v)| v.clone())
            .collect())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
