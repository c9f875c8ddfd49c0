//! Posture check route

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::AppJson;
use crate::services::PostureService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use fitkro_shared::{PostureCheckRequest, PostureFeedback};

pub fn posture_routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze_posture))
}

/// POST /api/v1/posture/analyze
async fn analyze_posture(
    State(state): State<AppState>,
    _auth: AuthUser,
    AppJson(req): AppJson<PostureCheckRequest>,
) -> ApiResult<Json<PostureFeedback>> {
    let feedback = PostureService::check(state.posture.as_ref(), &req).await?;
    Ok(Json(feedback))
}
