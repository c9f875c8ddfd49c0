//! Workout catalog and workout logs
//!
//! The catalog is a single shared document seeded on first read. Seeding
//! never overwrites a non-empty catalog, so repeated reads, and concurrent
//! first reads, all see the same list.

use crate::error::ApiError;
use crate::repositories::{new_log_id, KvStore, WorkoutRepository};
use chrono::Utc;
use fitkro_shared::stats::sort_chronologically;
use fitkro_shared::{
    Difficulty, Exercise, LogWorkoutRequest, WorkoutCategory, WorkoutDefinition, WorkoutLogEntry,
};
use tracing::info;
use uuid::Uuid;

pub struct WorkoutService;

impl WorkoutService {
    /// The catalog, seeding the defaults if it is missing or empty
    pub async fn catalog(store: &dyn KvStore) -> Result<Vec<WorkoutDefinition>, ApiError> {
        match WorkoutRepository::load_library(store)
            .await
            .map_err(ApiError::Internal)?
        {
            Some(workouts) if !workouts.is_empty() => Ok(workouts),
            Some(_) => {
                let defaults = default_catalog();
                WorkoutRepository::replace_library(store, &defaults)
                    .await
                    .map_err(ApiError::Internal)?;
                info!("Re-seeded empty workout library");
                Ok(defaults)
            }
            None => {
                let defaults = default_catalog();
                let wrote = WorkoutRepository::insert_library(store, &defaults)
                    .await
                    .map_err(ApiError::Internal)?;
                if wrote {
                    info!(count = defaults.len(), "Seeded workout library");
                    return Ok(defaults);
                }
                // Another request seeded it first
                Ok(WorkoutRepository::load_library(store)
                    .await
                    .map_err(ApiError::Internal)?
                    .unwrap_or(defaults))
            }
        }
    }

    /// Append a completed session to the user's workout log
    pub async fn log_workout(
        store: &dyn KvStore,
        user_id: Uuid,
        req: LogWorkoutRequest,
    ) -> Result<WorkoutLogEntry, ApiError> {
        let entry = WorkoutLogEntry {
            id: new_log_id(user_id),
            user_id,
            workout_id: req.workout_id,
            duration: req.duration,
            calories_burned: req.calories_burned,
            exercises: req.exercises,
            date: req.date.unwrap_or_else(|| Utc::now().fixed_offset()),
        };

        WorkoutRepository::create_log(store, &entry)
            .await
            .map_err(ApiError::Internal)?;

        info!(%user_id, log_id = %entry.id, workout_id = %entry.workout_id, "Workout logged");
        Ok(entry)
    }

    /// Full workout log, oldest first
    pub async fn history(store: &dyn KvStore, user_id: Uuid) -> Result<Vec<WorkoutLogEntry>, ApiError> {
        let mut workouts = WorkoutRepository::list_logs(store, user_id)
            .await
            .map_err(ApiError::Internal)?;
        sort_chronologically(&mut workouts);
        Ok(workouts)
    }
}

fn reps(name: &str, reps: u32, sets: u32) -> Exercise {
    Exercise {
        name: name.to_string(),
        reps: Some(reps),
        sets: Some(sets),
        duration: None,
    }
}

fn timed(name: &str, seconds: u32, sets: u32) -> Exercise {
    Exercise {
        name: name.to_string(),
        reps: None,
        sets: Some(sets),
        duration: Some(seconds),
    }
}

/// Built-in catalog written on first use
pub fn default_catalog() -> Vec<WorkoutDefinition> {
    vec![
        WorkoutDefinition {
            id: "1".to_string(),
            name: "Full Body Strength".to_string(),
            category: WorkoutCategory::Home,
            duration: 30,
            difficulty: Difficulty::Beginner,
            calories_estimate: 250.0,
            exercises: vec![
                reps("Push-ups", 10, 3),
                reps("Squats", 15, 3),
                timed("Plank", 30, 3),
                reps("Lunges", 10, 3),
            ],
        },
        WorkoutDefinition {
            id: "2".to_string(),
            name: "Cardio Blast".to_string(),
            category: WorkoutCategory::Cardio,
            duration: 20,
            difficulty: Difficulty::Intermediate,
            calories_estimate: 300.0,
            exercises: vec![
                timed("Jumping Jacks", 60, 3),
                timed("High Knees", 45, 3),
                reps("Burpees", 10, 3),
                timed("Mountain Climbers", 45, 3),
            ],
        },
        WorkoutDefinition {
            id: "3".to_string(),
            name: "Upper Body Focus".to_string(),
            category: WorkoutCategory::Gym,
            duration: 45,
            difficulty: Difficulty::Advanced,
            calories_estimate: 350.0,
            exercises: vec![
                reps("Bench Press", 12, 4),
                reps("Pull-ups", 8, 4),
                reps("Shoulder Press", 10, 3),
                reps("Bicep Curls", 12, 3),
            ],
        },
    ]
}
