//! Fit Kro WASM Module
//!
//! Browser bindings for the calculations the web client runs locally:
//! day totals, meal grouping, BMI, weight trend and the workout player.
//! Structured values cross the boundary as JSON strings in the same
//! camelCase shape the API uses.

use chrono::{DateTime, FixedOffset, NaiveDate};
use fitkro_shared::{
    calculate_bmi_result, daily_totals, group_by_meal, weight_trend, Advance, FoodLogEntry,
    WeightLogEntry, WorkoutDefinition, WorkoutLogEntry, WorkoutSession,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

type Result<T> = std::result::Result<T, String>;

fn parse<T: DeserializeOwned>(what: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| format!("invalid {}: {}", what, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn parse_day(date: &str) -> Result<NaiveDate> {
    date.parse()
        .map_err(|_| format!("invalid date {:?}, expected YYYY-MM-DD", date))
}

fn timestamp(now_ms: f64, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(now_ms as i64)
        .map(|t| t.with_timezone(&offset))
        .ok_or_else(|| format!("timestamp out of range: {}", now_ms))
}

fn js<T>(result: Result<T>) -> std::result::Result<T, JsError> {
    result.map_err(|e| JsError::new(&e))
}

fn daily_totals_json(workouts: &str, foods: &str, date: &str) -> Result<String> {
    let workouts: Vec<WorkoutLogEntry> = parse("workouts", workouts)?;
    let foods: Vec<FoodLogEntry> = parse("foods", foods)?;
    to_json(&daily_totals(&workouts, &foods, parse_day(date)?))
}

fn meal_breakdown_json(foods: &str, date: &str) -> Result<String> {
    let foods: Vec<FoodLogEntry> = parse("foods", foods)?;
    to_json(&group_by_meal(&foods, parse_day(date)?))
}

fn weight_trend_json(weights: &str) -> Result<String> {
    let weights: Vec<WeightLogEntry> = parse("weights", weights)?;
    to_json(&weight_trend(&weights))
}

/// Calories consumed, calories burned and whether a workout was done on `date`
#[wasm_bindgen(js_name = dailyTotals)]
pub fn daily_totals_js(
    workouts: &str,
    foods: &str,
    date: &str,
) -> std::result::Result<String, JsError> {
    js(daily_totals_json(workouts, foods, date))
}

/// Food entries of `date` grouped into breakfast, lunch, dinner and snacks
#[wasm_bindgen(js_name = mealBreakdown)]
pub fn meal_breakdown_js(foods: &str, date: &str) -> std::result::Result<String, JsError> {
    js(meal_breakdown_json(foods, date))
}

#[wasm_bindgen(js_name = weightTrend)]
pub fn weight_trend_js(weights: &str) -> std::result::Result<String, JsError> {
    js(weight_trend_json(weights))
}

/// BMI result as JSON, or `undefined` when either input is unusable
#[wasm_bindgen(js_name = bmi)]
pub fn bmi_js(weight_kg: f64, height_cm: f64) -> Option<String> {
    calculate_bmi_result(weight_kg, height_cm).and_then(|r| serde_json::to_string(&r).ok())
}

/// Plays one workout exercise by exercise
///
/// Times are `Date.now()` values; the offset is the client's UTC offset in
/// minutes east, so finished workouts land on the local calendar day.
#[wasm_bindgen]
pub struct WorkoutPlayer {
    session: WorkoutSession,
    offset: FixedOffset,
}

impl WorkoutPlayer {
    fn try_new(utc_offset_minutes: i32) -> Result<Self> {
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60)
            .ok_or_else(|| format!("invalid UTC offset: {} minutes", utc_offset_minutes))?;
        Ok(Self {
            session: WorkoutSession::new(),
            offset,
        })
    }

    fn try_start(&mut self, workout: &str, now_ms: f64) -> Result<()> {
        let workout: WorkoutDefinition = parse("workout", workout)?;
        let now = timestamp(now_ms, self.offset)?;
        self.session.start(workout, now).map_err(|e| e.to_string())
    }

    /// `None` while more exercises remain, the log body once finished
    fn try_advance(&mut self, now_ms: f64) -> Result<Option<String>> {
        let now = timestamp(now_ms, self.offset)?;
        match self.session.advance(now).map_err(|e| e.to_string())? {
            Advance::Next(_) => Ok(None),
            Advance::Finished(done) => to_json(&done.to_log_request()).map(Some),
        }
    }
}

#[wasm_bindgen]
impl WorkoutPlayer {
    #[wasm_bindgen(constructor)]
    pub fn new(utc_offset_minutes: i32) -> std::result::Result<WorkoutPlayer, JsError> {
        js(Self::try_new(utc_offset_minutes))
    }

    pub fn start(&mut self, workout: &str, now_ms: f64) -> std::result::Result<(), JsError> {
        js(self.try_start(workout, now_ms))
    }

    /// Returns the `POST /workouts/log` body after the last exercise
    pub fn advance(&mut self, now_ms: f64) -> std::result::Result<Option<String>, JsError> {
        js(self.try_advance(now_ms))
    }

    pub fn abandon(&mut self) {
        self.session.abandon();
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> Option<usize> {
        self.session.progress().map(|(index, _)| index)
    }

    #[wasm_bindgen(getter, js_name = exerciseCount)]
    pub fn exercise_count(&self) -> Option<usize> {
        self.session.progress().map(|(_, count)| count)
    }

    #[wasm_bindgen(js_name = currentExercise)]
    pub fn current_exercise(&self) -> Option<String> {
        self.session
            .current_exercise()
            .and_then(|e| serde_json::to_string(e).ok())
    }
}
