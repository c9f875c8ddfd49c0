//! Input validation functions
//!
//! Checks run before anything is written; each returns the first problem
//! found as a [`ValidationError`].

use crate::errors::ValidationError;
use crate::types::{LogFoodRequest, ProfileFields, SignupRequest, UpdateProfileRequest};
use std::sync::OnceLock;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_TEXT_LEN: usize = 2000;

fn email_regex() -> &'static regex_lite::Regex {
    static RE: OnceLock<regex_lite::Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Required("email"));
    }
    if email.len() > 255 {
        return Err(ValidationError::TooLong("email"));
    }
    if !email_regex().is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    if password.len() > 128 {
        return Err(ValidationError::TooLong("password"));
    }
    Ok(())
}

fn validate_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber(field));
    }
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), ValidationError> {
    validate_range("weight", weight_kg, 20.0, 500.0)
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), ValidationError> {
    validate_range("height", height_cm, 50.0, 300.0)
}

/// Validate age in years
pub fn validate_age(age: u32) -> Result<(), ValidationError> {
    validate_range("age", age as f64, 1.0, 150.0)
}

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), ValidationError> {
    validate_range("calories", calories, 0.0, 50000.0)
}

fn validate_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    if value.len() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong(field));
    }
    Ok(())
}

/// Validate a food entry before logging: name and calories are required
pub fn validate_food_entry(req: &LogFoodRequest) -> Result<(), ValidationError> {
    validate_text("foodName", &req.food_name)?;
    let calories = req.calories.ok_or(ValidationError::Required("calories"))?;
    validate_calories(calories)
}

/// Validate a coach chat message
pub fn validate_chat_message(message: &str) -> Result<(), ValidationError> {
    validate_text("message", message)
}

/// Validate an image reference
pub fn validate_image_url(image_url: &str) -> Result<(), ValidationError> {
    validate_text("imageUrl", image_url)
}

/// Validate the optional profile attributes that were supplied
pub fn validate_profile_fields(fields: &ProfileFields) -> Result<(), ValidationError> {
    if let Some(age) = fields.age {
        validate_age(age)?;
    }
    if let Some(height) = fields.height {
        validate_height_cm(height)?;
    }
    if let Some(weight) = fields.weight {
        validate_weight(weight)?;
    }
    Ok(())
}

/// Validate a sign-up request
pub fn validate_signup(req: &SignupRequest) -> Result<(), ValidationError> {
    validate_email(&req.email)?;
    validate_password(&req.password)?;
    validate_text("name", &req.name)?;
    validate_profile_fields(&req.profile)
}

/// Validate a partial profile update
pub fn validate_profile_update(req: &UpdateProfileRequest) -> Result<(), ValidationError> {
    if let Some(name) = &req.name {
        validate_text("name", name)?;
    }
    validate_profile_fields(&req.fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("a.b@c.io", true)]
    #[case("", false)]
    #[case("no-at-sign.com", false)]
    #[case("spaces in@x.com", false)]
    #[case("user@nodot", false)]
    fn test_validate_email(#[case] email: &str, #[case] ok: bool) {
        assert_eq!(validate_email(email).is_ok(), ok);
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("longenough").is_ok());
        assert_eq!(
            validate_password("short"),
            Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN))
        );
    }

    #[rstest]
    #[case(19.9, false)]
    #[case(20.0, true)]
    #[case(72.5, true)]
    #[case(500.0, true)]
    #[case(500.1, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    fn test_validate_weight(#[case] kg: f64, #[case] ok: bool) {
        assert_eq!(validate_weight(kg).is_ok(), ok);
    }

    #[test]
    fn test_food_entry_requires_name_and_calories() {
        let mut req = LogFoodRequest {
            food_name: "  ".to_string(),
            calories: Some(100.0),
            ..Default::default()
        };
        assert_eq!(
            validate_food_entry(&req),
            Err(ValidationError::Required("foodName"))
        );

        req.food_name = "Oats".to_string();
        req.calories = None;
        assert_eq!(
            validate_food_entry(&req),
            Err(ValidationError::Required("calories"))
        );

        req.calories = Some(-1.0);
        assert!(validate_food_entry(&req).is_err());

        req.calories = Some(0.0);
        assert!(validate_food_entry(&req).is_ok());
    }

    #[test]
    fn test_profile_update_only_checks_present_fields() {
        let empty = UpdateProfileRequest::default();
        assert!(validate_profile_update(&empty).is_ok());

        let bad_height = UpdateProfileRequest {
            fields: ProfileFields {
                height: Some(20.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_profile_update(&bad_height).is_err());

        let blank_name = UpdateProfileRequest {
            name: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_profile_update(&blank_name),
            Err(ValidationError::Required("name"))
        );
    }

    #[test]
    fn test_signup_requires_name() {
        let req = SignupRequest {
            email: "new@example.com".to_string(),
            password: "password123".to_string(),
            name: String::new(),
            profile: ProfileFields::default(),
        };
        assert_eq!(validate_signup(&req), Err(ValidationError::Required("name")));
    }
}
