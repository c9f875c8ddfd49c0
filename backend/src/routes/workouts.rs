//! Workout catalog and workout log routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::AppJson;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitkro_shared::{LogAck, LogWorkoutRequest, WorkoutHistoryResponse, WorkoutsResponse};

pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", get(list_workouts))
        .route("/workouts/log", post(log_workout))
        .route("/workouts/history", get(workout_history))
}

/// GET /api/v1/workouts - public, seeds the catalog on first call
async fn list_workouts(State(state): State<AppState>) -> ApiResult<Json<WorkoutsResponse>> {
    let workouts = WorkoutService::catalog(state.store()).await?;
    Ok(Json(WorkoutsResponse { workouts }))
}

/// POST /api/v1/workouts/log
async fn log_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(req): AppJson<LogWorkoutRequest>,
) -> ApiResult<Json<LogAck>> {
    let entry = WorkoutService::log_workout(state.store(), auth.user_id, req).await?;
    Ok(Json(LogAck {
        success: true,
        log_id: entry.id,
    }))
}

/// GET /api/v1/workouts/history
async fn workout_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<WorkoutHistoryResponse>> {
    let workouts = WorkoutService::history(state.store(), auth.user_id).await?;
    Ok(Json(WorkoutHistoryResponse { workouts }))
}
