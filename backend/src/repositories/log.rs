//! Shared plumbing for the append-only per-user collections

use super::kv::{keys, Collection, KvStore};
use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Write one entry under `user:{id}:{collection}:{logId}`
pub(crate) async fn append<T: Serialize>(
    store: &dyn KvStore,
    user_id: Uuid,
    collection: Collection,
    log_id: &str,
    entry: &T,
) -> Result<()> {
    let value = serde_json::to_value(entry)
        .with_context(|| format!("serialize {} entry", collection.as_str()))?;
    store
        .set(&keys::entry(user_id, collection, log_id), value)
        .await
}

/// Every entry of a collection, in key order
///
/// Records that no longer deserialize are skipped so one bad row cannot
/// take down a whole history or aggregate.
pub(crate) async fn list<T: DeserializeOwned>(
    store: &dyn KvStore,
    user_id: Uuid,
    collection: Collection,
) -> Result<Vec<T>> {
    let values = store
        .get_by_prefix(&keys::collection_prefix(user_id, collection))
        .await?;

    let mut entries = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<T>(value) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!(
                %user_id,
                collection = collection.as_str(),
                error = %e,
                "Skipping malformed log record"
            ),
        }
    }
    Ok(entries)
}
