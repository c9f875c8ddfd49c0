//! Route definitions for the Fit Kro API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use chrono::{NaiveDate, Utc};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod coach;
mod food;
mod health;
mod posture;
mod profile;
mod stats;
mod weight;
mod workouts;


pub use auth::auth_routes;
pub use coach::coach_routes;
pub use food::food_routes;
pub use posture::posture_routes;
pub use profile::profile_routes;
pub use stats::stats_routes;
pub use weight::weight_routes;
pub use workouts::workout_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Fit Kro API v1" }))
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(workout_routes())
        .merge(stats_routes())
        .nest("/food", food_routes())
        .nest("/coach", coach_routes())
        .nest("/weight", weight_routes())
        .nest("/posture", posture_routes())
}

/// Calendar day used when a `date` query parameter is omitted
pub(crate) fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
