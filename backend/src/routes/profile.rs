//! Profile routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::AppJson;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitkro_shared::{ProfileResponse, UpdateProfileRequest};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

/// GET /api/v1/profile - `profile` is null before onboarding
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = ProfileService::get(state.store(), auth.user_id).await?;
    Ok(Json(ProfileResponse { profile }))
}

/// PUT /api/v1/profile
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(req): AppJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = ProfileService::update(state.store(), auth.user_id, req).await?;
    Ok(Json(ProfileResponse {
        profile: Some(profile),
    }))
}
