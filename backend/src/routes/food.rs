//! Food log routes

use super::today_utc;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::{AppJson, AppQuery};
use crate::services::NutritionService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitkro_shared::{
    AnalyzeFoodRequest, AnalyzeFoodResponse, DayQuery, FoodHistoryResponse, LogAck,
    LogFoodRequest, MealBreakdownResponse,
};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/log", post(log_food))
        .route("/history", get(food_history))
        .route("/meals", get(meal_breakdown))
        .route("/analyze", post(analyze_food))
}

/// POST /api/v1/food/log
async fn log_food(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(req): AppJson<LogFoodRequest>,
) -> ApiResult<Json<LogAck>> {
    let entry = NutritionService::log_food(state.store(), auth.user_id, req).await?;
    Ok(Json(LogAck {
        success: true,
        log_id: entry.id,
    }))
}

/// GET /api/v1/food/history?date=YYYY-MM-DD - without `date`, the whole log
async fn food_history(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<DayQuery>,
) -> ApiResult<Json<FoodHistoryResponse>> {
    let foods = NutritionService::history(state.store(), auth.user_id, query.date).await?;
    Ok(Json(FoodHistoryResponse { foods }))
}

/// GET /api/v1/food/meals?date=YYYY-MM-DD
async fn meal_breakdown(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<DayQuery>,
) -> ApiResult<Json<MealBreakdownResponse>> {
    let day = query.date.unwrap_or_else(today_utc);
    let breakdown = NutritionService::meals(state.store(), auth.user_id, day).await?;
    Ok(Json(breakdown))
}

/// POST /api/v1/food/analyze
async fn analyze_food(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppJson(req): AppJson<AnalyzeFoodRequest>,
) -> ApiResult<Json<AnalyzeFoodResponse>> {
    let resp = NutritionService::analyze(state.classifier.as_ref(), &req.image_url).await?;
    Ok(Json(resp))
}
