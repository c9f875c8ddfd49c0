//! API request and response types
//!
//! Field names are camelCase on the wire to match the web client.

use crate::health_metrics::BmiResult;
use crate::lenient;
use crate::models::{
    ActivityLevel, ChatMessage, DietPreference, Exercise, FitnessGoal, FoodLogEntry, Gender, Meal,
    WeightLogEntry, WorkoutDefinition, WorkoutLogEntry,
};
use crate::stats::WeightTrend;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Identity
// ============================================================================

/// Sign-up request: credentials plus the onboarding profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub profile: ProfileFields,
}

/// Profile attributes that can be set at sign-up or patched later
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    #[serde(default, deserialize_with = "lenient::optional_enum", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "lenient::optional_count", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_enum", skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    #[serde(default, deserialize_with = "lenient::optional_enum", skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default, deserialize_with = "lenient::optional_enum", skip_serializing_if = "Option::is_none")]
    pub diet_preference: Option<DietPreference>,
}

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Public view of an account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// Sign-up response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user: AccountSummary,
    pub tokens: AuthTokens,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Refresh token request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Profile
// ============================================================================

/// Profile envelope; `profile` is null when nothing was stored yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: Option<crate::models::UserProfile>,
}

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: ProfileFields,
}

// ============================================================================
// Workouts
// ============================================================================

/// Workout catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutsResponse {
    pub workouts: Vec<WorkoutDefinition>,
}

/// Log a finished workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogWorkoutRequest {
    #[serde(default)]
    pub workout_id: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub duration: u32,
    #[serde(default, deserialize_with = "lenient::number")]
    pub calories_burned: f64,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// Defaults to the time of the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
}

/// Acknowledgement for an appended log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogAck {
    pub success: bool,
    pub log_id: String,
}

/// Workout history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutHistoryResponse {
    pub workouts: Vec<WorkoutLogEntry>,
}

// ============================================================================
// Food
// ============================================================================

/// Log a food entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFoodRequest {
    #[serde(default)]
    pub food_name: String,
    /// Required; kept optional so a missing value is a validation error
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub protein: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub fats: f64,
    #[serde(default)]
    pub meal: Meal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Optional calendar-day filter (`?date=YYYY-MM-DD`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Food history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodHistoryResponse {
    pub foods: Vec<FoodLogEntry>,
}

/// Food image analysis request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFoodRequest {
    #[serde(default)]
    pub image_url: String,
}

/// Food recognized in an image, with per-serving nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFood {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub confidence: f64,
}

/// Food image analysis response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeFoodResponse {
    pub detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<DetectedFood>,
}

/// Calories for one meal slot and the entries behind them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSummary {
    pub meal: Meal,
    pub calories: f64,
    pub entries: Vec<FoodLogEntry>,
}

/// Per-meal breakdown of a day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealBreakdownResponse {
    pub date: NaiveDate,
    pub meals: Vec<MealSummary>,
    pub total_calories: f64,
}

// ============================================================================
// Coach
// ============================================================================

/// Message to the coach
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Coach reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Chat transcript, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
}

// ============================================================================
// Stats and Progress
// ============================================================================

/// Same-day aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatsResponse {
    pub date: NaiveDate,
    pub calories_consumed: f64,
    pub calories_burned: f64,
    pub workout_completed: bool,
    /// Placeholder until a step source exists; not a measurement
    pub steps: u32,
}

/// Historical aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub bmi: Option<BmiResult>,
    pub weight_change: WeightTrend,
    pub weekly_workouts: usize,
    pub total_calories_burned: f64,
    pub total_workouts: usize,
}

// ============================================================================
// Weight
// ============================================================================

/// Log a weight measurement in kg
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogWeightRequest {
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<FixedOffset>>,
}

/// Weight history, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightHistoryResponse {
    pub weights: Vec<WeightLogEntry>,
}

// ============================================================================
// Posture
// ============================================================================

/// Posture check request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureCheckRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<String>,
}

/// Overall form rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostureScore {
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

/// Posture check result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureFeedback {
    pub score: PostureScore,
    pub mistakes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signup_request_flattens_profile() {
        let req: SignupRequest = serde_json::from_value(json!({
            "email": "a@b.co",
            "password": "password123",
            "name": "Asha",
            "gender": "female",
            "age": "29",
            "height": 165,
            "weight": "58.5",
            "goal": "maintain",
            "activityLevel": "moderate",
            "dietPreference": "vegetarian"
        }))
        .unwrap();

        assert_eq!(req.profile.age, Some(29));
        assert_eq!(req.profile.weight, Some(58.5));
        assert_eq!(req.profile.activity_level, Some(ActivityLevel::Moderate));
        assert_eq!(req.profile.diet_preference, Some(DietPreference::Vegetarian));
    }

    #[test]
    fn test_food_request_missing_calories_is_none() {
        let req: LogFoodRequest =
            serde_json::from_value(json!({ "foodName": "Tea", "meal": "lunch" })).unwrap();
        assert_eq!(req.calories, None);
        assert_eq!(req.meal, Meal::Lunch);
    }

    #[test]
    fn test_posture_score_wire_names() {
        assert_eq!(
            serde_json::to_value(PostureScore::NeedsImprovement).unwrap(),
            json!("Needs Improvement")
        );
    }
}
