//! Food logging, per-meal breakdown and image analysis
//!
//! Image analysis goes through [`FoodClassifier`]. The shipped classifier
//! is a stand-in that picks one of a few common dishes at random; it never
//! looks at the image.

use crate::error::ApiError;
use crate::repositories::{new_log_id, FoodRepository, KvStore};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fitkro_shared::stats::{entries_on_day, group_by_meal, sort_chronologically};
use fitkro_shared::validation::{validate_food_entry, validate_image_url};
use fitkro_shared::{
    AnalyzeFoodResponse, DetectedFood, FoodLogEntry, LogFoodRequest, MealBreakdownResponse,
};
use rand::seq::SliceRandom;
use tracing::info;
use uuid::Uuid;

/// Recognizes a dish in a food photo
#[async_trait]
pub trait FoodClassifier: Send + Sync {
    /// `None` when nothing recognizable was found
    async fn classify(&self, image_url: &str) -> anyhow::Result<Option<DetectedFood>>;
}

/// Random pick from a fixed menu
pub struct MockFoodClassifier;

impl MockFoodClassifier {
    pub fn menu() -> Vec<DetectedFood> {
        let dish = |name: &str, calories, protein, carbs, fats, confidence| DetectedFood {
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fats,
            confidence,
        };
        vec![
            dish("Grilled Chicken Breast", 165.0, 31.0, 0.0, 3.6, 0.92),
            dish("Caesar Salad", 220.0, 8.0, 12.0, 16.0, 0.88),
            dish("Rice Bowl", 280.0, 5.0, 60.0, 2.0, 0.85),
            dish("Pizza Slice", 285.0, 12.0, 36.0, 10.0, 0.90),
        ]
    }
}

#[async_trait]
impl FoodClassifier for MockFoodClassifier {
    async fn classify(&self, _image_url: &str) -> anyhow::Result<Option<DetectedFood>> {
        Ok(Self::menu().choose(&mut rand::thread_rng()).cloned())
    }
}

pub struct NutritionService;

impl NutritionService {
    pub async fn log_food(
        store: &dyn KvStore,
        user_id: Uuid,
        req: LogFoodRequest,
    ) -> Result<FoodLogEntry, ApiError> {
        validate_food_entry(&req)?;

        let entry = FoodLogEntry {
            id: new_log_id(user_id),
            user_id,
            food_name: req.food_name.trim().to_string(),
            calories: req.calories.unwrap_or_default(),
            protein: req.protein,
            carbs: req.carbs,
            fats: req.fats,
            meal: req.meal,
            date: req.date.unwrap_or_else(|| Utc::now().fixed_offset()),
            image_url: req.image_url,
        };

        FoodRepository::create(store, &entry)
            .await
            .map_err(ApiError::Internal)?;

        info!(%user_id, log_id = %entry.id, meal = ?entry.meal, "Food logged");
        Ok(entry)
    }

    /// Food log oldest first, optionally limited to one calendar day
    pub async fn history(
        store: &dyn KvStore,
        user_id: Uuid,
        day: Option<NaiveDate>,
    ) -> Result<Vec<FoodLogEntry>, ApiError> {
        let foods = FoodRepository::list(store, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let mut foods = match day {
            Some(day) => entries_on_day(&foods, day).cloned().collect(),
            None => foods,
        };
        sort_chronologically(&mut foods);
        Ok(foods)
    }

    /// Calories per meal slot for one day
    pub async fn meals(
        store: &dyn KvStore,
        user_id: Uuid,
        day: NaiveDate,
    ) -> Result<MealBreakdownResponse, ApiError> {
        let mut foods = FoodRepository::list(store, user_id)
            .await
            .map_err(ApiError::Internal)?;
        sort_chronologically(&mut foods);

        let meals = group_by_meal(&foods, day);
        let total_calories = meals.iter().map(|m| m.calories).sum();

        Ok(MealBreakdownResponse {
            date: day,
            meals,
            total_calories,
        })
    }

    /// Identify the dish in a photo; nothing is logged until the user confirms
    pub async fn analyze(
        classifier: &dyn FoodClassifier,
        image_url: &str,
    ) -> Result<AnalyzeFoodResponse, ApiError> {
        validate_image_url(image_url)?;

        let food = classifier
            .classify(image_url)
            .await
            .map_err(ApiError::Internal)?;

        Ok(AnalyzeFoodResponse {
            detected: food.is_some(),
            food,
        })
    }
}
