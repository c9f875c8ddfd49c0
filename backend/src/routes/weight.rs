//! Weight log routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::AppJson;
use crate::services::WeightService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitkro_shared::{LogAck, LogWeightRequest, WeightHistoryResponse};

pub fn weight_routes() -> Router<AppState> {
    Router::new()
        .route("/log", post(log_weight))
        .route("/history", get(weight_history))
}

/// POST /api/v1/weight/log - weight in kg
async fn log_weight(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(req): AppJson<LogWeightRequest>,
) -> ApiResult<Json<LogAck>> {
    let entry = WeightService::log_weight(state.store(), auth.user_id, req).await?;
    Ok(Json(LogAck {
        success: true,
        log_id: entry.id,
    }))
}

/// GET /api/v1/weight/history - oldest first
async fn weight_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<WeightHistoryResponse>> {
    let weights = WeightService::history(state.store(), auth.user_id).await?;
    Ok(Json(WeightHistoryResponse { weights }))
}
