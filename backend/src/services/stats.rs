//! Daily stats and progress summary
//!
//! Thin I/O wrapper around `fitkro_shared::stats`: load the user's logs,
//! hand them to the pure reducers. Nothing is cached.

use crate::error::ApiError;
use crate::repositories::{FoodRepository, KvStore, ProfileRepository, WeightRepository, WorkoutRepository};
use chrono::{DateTime, NaiveDate, Utc};
use fitkro_shared::stats::{
    daily_totals, total_calories_burned, weekly_workout_count, weight_trend,
    PLACEHOLDER_STEPS_MAX, PLACEHOLDER_STEPS_MIN,
};
use fitkro_shared::{bmi_for_profile, DailyStatsResponse, ProgressResponse};
use rand::Rng;
use uuid::Uuid;

pub struct StatsService;

impl StatsService {
    /// Totals for one calendar day
    pub async fn daily(
        store: &dyn KvStore,
        user_id: Uuid,
        day: NaiveDate,
    ) -> Result<DailyStatsResponse, ApiError> {
        let (workouts, foods) = tokio::try_join!(
            WorkoutRepository::list_logs(store, user_id),
            FoodRepository::list(store, user_id),
        )
        .map_err(ApiError::Internal)?;

        let totals = daily_totals(&workouts, &foods, day);

        Ok(DailyStatsResponse {
            date: day,
            calories_consumed: totals.calories_consumed,
            calories_burned: totals.calories_burned,
            workout_completed: totals.workout_completed,
            steps: placeholder_steps(),
        })
    }

    /// BMI, weight trend and workout counts over the whole history
    pub async fn progress(
        store: &dyn KvStore,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<ProgressResponse, ApiError> {
        let (profile, workouts, weights) = tokio::try_join!(
            ProfileRepository::get(store, user_id),
            WorkoutRepository::list_logs(store, user_id),
            WeightRepository::list(store, user_id),
        )
        .map_err(ApiError::Internal)?;

        Ok(ProgressResponse {
            bmi: profile.as_ref().and_then(bmi_for_profile),
            weight_change: weight_trend(&weights),
            weekly_workouts: weekly_workout_count(&workouts, now),
            total_calories_burned: total_calories_burned(&workouts),
            total_workouts: workouts.len(),
        })
    }
}

/// Stand-in until a real step source exists
fn placeholder_steps() -> u32 {
    rand::thread_rng().gen_range(PLACEHOLDER_STEPS_MIN..PLACEHOLDER_STEPS_MAX)
}
