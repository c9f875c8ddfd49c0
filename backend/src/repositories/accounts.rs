//! Account repository
//!
//! Credentials live in the same key-value store as everything else. The
//! email key is the uniqueness claim: whoever writes it first owns the
//! address.

use super::kv::{keys, KvStore};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Stored account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account repository
pub struct AccountRepository;

impl AccountRepository {
    /// Store a new account. Returns `false` if the email is already taken.
    ///
    /// If the id key cannot be written the email claim is released again.
    pub async fn create(store: &dyn KvStore, account: &AccountRecord) -> Result<bool> {
        let value = serde_json::to_value(account).context("serialize account")?;

        if !store
            .set_if_absent(&keys::account_email(&account.email), value.clone())
            .await?
        {
            return Ok(false);
        }
        if let Err(e) = store.set(&keys::account(account.id), value).await {
            Self::remove(store, account).await;
            return Err(e);
        }
        Ok(true)
    }

    /// Undo [`create`](Self::create); failures are logged, not returned
    pub async fn remove(store: &dyn KvStore, account: &AccountRecord) {
        for key in [keys::account(account.id), keys::account_email(&account.email)] {
            if let Err(e) = store.delete(&key).await {
                warn!(error = %e, key = %key, "Failed to remove account key");
            }
        }
    }

    pub async fn find_by_email(store: &dyn KvStore, email: &str) -> Result<Option<AccountRecord>> {
        Self::read(store, &keys::account_email(email)).await
    }

    pub async fn find_by_id(store: &dyn KvStore, user_id: Uuid) -> Result<Option<AccountRecord>> {
        Self::read(store, &keys::account(user_id)).await
    }

    async fn read(store: &dyn KvStore, key: &str) -> Result<Option<AccountRecord>> {
        store
            .get(key)
            .await?
            .map(|v| serde_json::from_value(v).context("malformed account record"))
            .transpose()
    }
}
