//! Profile repository: one document per user

use super::kv::{keys, KvStore};
use anyhow::{Context, Result};
use fitkro_shared::UserProfile;
use uuid::Uuid;

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn get(store: &dyn KvStore, user_id: Uuid) -> Result<Option<UserProfile>> {
        store
            .get(&keys::profile(user_id))
            .await?
            .map(|v| serde_json::from_value(v).context("malformed profile record"))
            .transpose()
    }

    /// Replace the stored profile
    pub async fn save(store: &dyn KvStore, profile: &UserProfile) -> Result<()> {
        let value = serde_json::to_value(profile).context("serialize profile")?;
        store.set(&keys::profile(profile.user_id), value).await
    }
}
