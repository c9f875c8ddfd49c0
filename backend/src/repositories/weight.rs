//! Weight log repository

use super::kv::{Collection, KvStore};
use super::log;
use anyhow::Result;
use fitkro_shared::WeightLogEntry;
use uuid::Uuid;

pub struct WeightRepository;

impl WeightRepository {
    pub async fn create(store: &dyn KvStore, entry: &WeightLogEntry) -> Result<()> {
        log::append(store, entry.user_id, Collection::Weight, &entry.id, entry).await
    }

    /// Entries in storage order; callers sort by date
    pub async fn list(store: &dyn KvStore, user_id: Uuid) -> Result<Vec<WeightLogEntry>> {
        log::list(store, user_id, Collection::Weight).await
    }
}
