//! Workout catalog and workout log repository

use super::kv::{keys, Collection, KvStore};
use super::log;
use anyhow::{Context, Result};
use fitkro_shared::{WorkoutDefinition, WorkoutLogEntry};
use tracing::warn;
use uuid::Uuid;

pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Stored catalog, `None` if it was never written
    ///
    /// A stored value that is not a list of definitions reads as an empty
    /// catalog so that it gets replaced.
    pub async fn load_library(store: &dyn KvStore) -> Result<Option<Vec<WorkoutDefinition>>> {
        let Some(value) = store.get(keys::WORKOUT_LIBRARY).await? else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(workouts) => Ok(Some(workouts)),
            Err(e) => {
                warn!(error = %e, "Stored workout library is malformed");
                Ok(Some(Vec::new()))
            }
        }
    }

    /// Write the catalog unless one already exists. Returns whether it wrote.
    pub async fn insert_library(
        store: &dyn KvStore,
        workouts: &[WorkoutDefinition],
    ) -> Result<bool> {
        let value = serde_json::to_value(workouts).context("serialize workout library")?;
        store.set_if_absent(keys::WORKOUT_LIBRARY, value).await
    }

    pub async fn replace_library(store: &dyn KvStore, workouts: &[WorkoutDefinition]) -> Result<()> {
        let value = serde_json::to_value(workouts).context("serialize workout library")?;
        store.set(keys::WORKOUT_LIBRARY, value).await
    }

    pub async fn create_log(store: &dyn KvStore, entry: &WorkoutLogEntry) -> Result<()> {
        log::append(store, entry.user_id, Collection::Workout, &entry.id, entry).await
    }

    pub async fn list_logs(store: &dyn KvStore, user_id: Uuid) -> Result<Vec<WorkoutLogEntry>> {
        log::list(store, user_id, Collection::Workout).await
    }
}
