//! Data models for the Fit Kro application
//!
//! Every log entry is append-only: it is written once under a key made of
//! the owner's id and the creation timestamp, and never edited afterwards.

use crate::lenient;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender as entered during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// What the user is training towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    Lose,
    Gain,
    Maintain,
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    Moderate,
    /// 6-7 days/week
    Very,
}

/// Dietary preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    None,
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
}

/// One profile per user, created at sign-up and patched by profile edits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "lenient::optional_enum", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "lenient::optional_count", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Height in centimeters
    #[serde(default, deserialize_with = "lenient::optional_number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default, deserialize_with = "lenient::optional_number", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_enum", skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    #[serde(default, deserialize_with = "lenient::optional_enum", skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default, deserialize_with = "lenient::optional_enum", skip_serializing_if = "Option::is_none")]
    pub diet_preference: Option<DietPreference>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Workout Library
// ============================================================================

/// Where a workout is meant to be done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutCategory {
    Home,
    Gym,
    Cardio,
}

/// Workout difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single step of a workout: either rep-based or timed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Seconds per set for timed exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Catalog entry, shared by all users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDefinition {
    pub id: String,
    pub name: String,
    pub category: WorkoutCategory,
    /// Planned length in minutes
    pub duration: u32,
    pub difficulty: Difficulty,
    pub calories_estimate: f64,
    pub exercises: Vec<Exercise>,
}

// ============================================================================
// Activity Logs
// ============================================================================

/// Meal slot a food entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl Meal {
    /// All meals in display order
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snacks];
}

/// A completed workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLogEntry {
    pub id: String,
    pub user_id: Uuid,
    pub workout_id: String,
    /// Minutes
    #[serde(default, deserialize_with = "lenient::count")]
    pub duration: u32,
    #[serde(default, deserialize_with = "lenient::number")]
    pub calories_burned: f64,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    pub date: DateTime<FixedOffset>,
}

/// A food item eaten at some meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogEntry {
    pub id: String,
    pub user_id: Uuid,
    pub food_name: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub fats: f64,
    #[serde(default)]
    pub meal: Meal,
    pub date: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A body weight measurement in kilograms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightLogEntry {
    pub id: String,
    pub user_id: Uuid,
    #[serde(default, deserialize_with = "lenient::number")]
    pub weight: f64,
    pub date: DateTime<FixedOffset>,
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One line of the coach transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Anything that carries the timestamp it was logged for
pub trait Dated {
    fn date(&self) -> DateTime<FixedOffset>;

    /// Calendar day in the offset the client recorded the entry with.
    ///
    /// This is the same day as the `YYYY-MM-DD` prefix of the serialized
    /// ISO timestamp.
    fn calendar_day(&self) -> NaiveDate {
        self.date().date_naive()
    }
}

impl Dated for WorkoutLogEntry {
    fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }
}

impl Dated for FoodLogEntry {
    fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }
}

impl Dated for WeightLogEntry {
    fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }
}
