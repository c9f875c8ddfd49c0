//! Fit Kro Shared Library
//!
//! Domain types, wire types, validation and the pure calculations
//! (BMI, daily/historical stats, workout session stepping) shared by the
//! backend and the WASM bindings. Nothing in this crate performs I/O.

pub mod errors;
pub mod health_metrics;
pub mod lenient;
pub mod models;
pub mod session;
pub mod stats;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use session::{Advance, CompletedWorkout, SessionError, SessionState, WorkoutSession};
pub use stats::*;
pub use types::*;
