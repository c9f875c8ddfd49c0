//! Stats and progress routes

use super::today_utc;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::AppQuery;
use crate::services::StatsService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use fitkro_shared::{DailyStatsResponse, DayQuery, ProgressResponse};

pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(daily_stats))
        .route("/stats/progress", get(progress))
}

/// GET /api/v1/stats?date=YYYY-MM-DD
///
/// The client passes its local date; without it the UTC date is used.
async fn daily_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(query): AppQuery<DayQuery>,
) -> ApiResult<Json<DailyStatsResponse>> {
    let day = query.date.unwrap_or_else(today_utc);
    let stats = StatsService::daily(state.store(), auth.user_id, day).await?;
    Ok(Json(stats))
}

/// GET /api/v1/stats/progress
async fn progress(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProgressResponse>> {
    let progress = StatsService::progress(state.store(), auth.user_id, Utc::now()).await?;
    Ok(Json(progress))
}
