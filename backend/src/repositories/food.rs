//! Food log repository

use super::kv::{Collection, KvStore};
use super::log;
use anyhow::Result;
use fitkro_shared::FoodLogEntry;
use uuid::Uuid;

pub struct FoodRepository;

impl FoodRepository {
    pub async fn create(store: &dyn KvStore, entry: &FoodLogEntry) -> Result<()> {
        log::append(store, entry.user_id, Collection::Food, &entry.id, entry).await
    }

    pub async fn list(store: &dyn KvStore, user_id: Uuid) -> Result<Vec<FoodLogEntry>> {
        log::list(store, user_id, Collection::Food).await
    }
}
