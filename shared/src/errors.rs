//! Error types for the Fit Kro domain

use thiserror::Error;

/// Input rejected before it reaches storage
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{0} must be a valid number")]
    NotANumber(&'static str),

    #[error("{0} is too long")]
    TooLong(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}
