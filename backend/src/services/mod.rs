//! Business logic services
//!
//! Services validate input, coordinate repositories and the pluggable mock
//! surfaces (food classifier, coach, posture analyzer), and map failures to
//! `ApiError`.

pub mod coach;
pub mod identity;
pub mod nutrition;
pub mod posture;
pub mod profile;
pub mod stats;
pub mod weight;
pub mod workout;

pub use coach::{CoachResponder, CoachService, KeywordCoach};
pub use identity::IdentityService;
pub use nutrition::{FoodClassifier, MockFoodClassifier, NutritionService};
pub use posture::{MockPostureAnalyzer, PostureAnalyzer, PostureService};
pub use profile::ProfileService;
pub use stats::StatsService;
pub use weight::WeightService;
pub use workout::WorkoutService;
