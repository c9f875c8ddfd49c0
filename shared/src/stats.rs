//! Derived stats engine
//!
//! Read-only aggregates over the append-only activity logs. Nothing here
//! is persisted: callers scan the full log for a user and reduce it on
//! every request, so results always reflect the latest writes.
//!
//! Numeric fields have already been coerced to zero when unusable (see
//! [`crate::lenient`]), so every sum here is total.

use crate::health_metrics::round_to;
use crate::models::{Dated, FoodLogEntry, Meal, WeightLogEntry, WorkoutLogEntry};
use crate::types::MealSummary;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the placeholder step count
pub const PLACEHOLDER_STEPS_MIN: u32 = 3000;
/// Upper bound (exclusive) of the placeholder step count
pub const PLACEHOLDER_STEPS_MAX: u32 = 8000;

/// Window used by [`weekly_workout_count`]
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Same-day totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub calories_consumed: f64,
    pub calories_burned: f64,
    pub workout_completed: bool,
}

/// Direction of the weight curve between first and last entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Weight change over the whole history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTrend {
    /// Absolute difference in kg, one decimal
    pub change: f64,
    pub trend: TrendDirection,
}

impl Default for WeightTrend {
    fn default() -> Self {
        Self {
            change: 0.0,
            trend: TrendDirection::Stable,
        }
    }
}

/// Entries recorded on the given calendar day
pub fn entries_on_day<T: Dated>(entries: &[T], day: NaiveDate) -> impl Iterator<Item = &T> {
    entries.iter().filter(move |e| e.calendar_day() == day)
}

/// Calories, burn and workout flag for one calendar day
pub fn daily_totals(
    workouts: &[WorkoutLogEntry],
    foods: &[FoodLogEntry],
    day: NaiveDate,
) -> DailyTotals {
    let calories_consumed = entries_on_day(foods, day).map(|f| f.calories).sum();

    let mut calories_burned = 0.0;
    let mut workout_completed = false;
    for w in entries_on_day(workouts, day) {
        calories_burned += w.calories_burned;
        workout_completed = true;
    }

    DailyTotals {
        calories_consumed,
        calories_burned,
        workout_completed,
    }
}

/// Compare the earliest and latest weight entries
///
/// Input order does not matter; entries are ordered by date first.
pub fn weight_trend(entries: &[WeightLogEntry]) -> WeightTrend {
    if entries.len() < 2 {
        return WeightTrend::default();
    }

    let mut ordered: Vec<&WeightLogEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.date);

    let first = ordered[0].weight;
    let last = ordered[ordered.len() - 1].weight;
    let delta = last - first;

    let trend = if delta < 0.0 {
        TrendDirection::Down
    } else if delta > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Stable
    };

    WeightTrend {
        change: round_to(delta.abs(), 1),
        trend,
    }
}

/// Workouts logged at or after `now - 7 days`
pub fn weekly_workout_count(workouts: &[WorkoutLogEntry], now: DateTime<Utc>) -> usize {
    let cutoff = now - Duration::days(WEEKLY_WINDOW_DAYS);
    workouts.iter().filter(|w| w.date >= cutoff).count()
}

/// All-time calories burned
pub fn total_calories_burned(workouts: &[WorkoutLogEntry]) -> f64 {
    workouts.iter().map(|w| w.calories_burned).sum()
}

/// Calories logged for one meal slot
pub fn meal_calories(foods: &[FoodLogEntry], meal: Meal) -> f64 {
    foods.iter().filter(|f| f.meal == meal).map(|f| f.calories).sum()
}

/// Partition a day's food entries by meal, in display order
///
/// Every meal appears in the result, empty ones with zero calories.
pub fn group_by_meal(foods: &[FoodLogEntry], day: NaiveDate) -> Vec<MealSummary> {
    let todays: Vec<FoodLogEntry> = entries_on_day(foods, day).cloned().collect();

    Meal::ALL
        .iter()
        .map(|&meal| MealSummary {
            meal,
            calories: meal_calories(&todays, meal),
            entries: todays.iter().filter(|f| f.meal == meal).cloned().collect(),
        })
        .collect()
}

/// Sort any dated entries oldest first
pub fn sort_chronologically<T: Dated>(entries: &mut [T]) {
    entries.sort_by_key(|e| e.date());
}
