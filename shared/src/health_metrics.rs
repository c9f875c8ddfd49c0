//! Health metrics calculations module
//!
//! BMI, its classification and the healthy weight range for a height.
//! Missing or non-positive inputs yield `None`.

use crate::models::UserProfile;
use serde::{Deserialize, Serialize};

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
///
/// The bands are contiguous and cover `[0, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the BMI range for this category (lower bound inclusive)
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    /// BMI rounded to one decimal
    pub value: f64,
    /// Category of the rounded value
    pub category: BmiCategory,
    /// Weight range in kg that gives a normal BMI at this height
    pub healthy_weight_range_kg: (f64, f64),
}

/// Round to a fixed number of decimals
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Calculate BMI from weight and height, rounded to one decimal
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// Returns `None` unless both inputs are finite and positive.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !(weight_kg.is_finite() && height_cm.is_finite()) || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(round_to(weight_kg / (height_m * height_m), 1))
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate healthy weight range for a given height
///
/// Based on BMI 18.5-25 (normal range), rounded to one decimal
pub fn healthy_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    let (lo, hi) = BmiCategory::Normal.range();
    (round_to(lo * height_m_sq, 1), round_to(hi * height_m_sq, 1))
}

/// Calculate complete BMI result
pub fn calculate_bmi_result(weight_kg: f64, height_cm: f64) -> Option<BmiResult> {
    let value = calculate_bmi(weight_kg, height_cm)?;
    Some(BmiResult {
        value,
        category: classify_bmi(value),
        healthy_weight_range_kg: healthy_weight_range_kg(height_cm),
    })
}

/// BMI for a stored profile; `None` when height or weight is missing
pub fn bmi_for_profile(profile: &UserProfile) -> Option<BmiResult> {
    calculate_bmi_result(profile.weight?, profile.height?)
}
