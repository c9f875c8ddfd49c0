//! Sign-up, login and token refresh
//!
//! Password hashing runs on the blocking pool, see `PasswordService`.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::AppJson;
use crate::services::IdentityService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitkro_shared::{
    AccountSummary, AuthTokens, LoginRequest, RefreshTokenRequest, SignupRequest, SignupResponse,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/refresh", post(refresh_token))
        .route("/me", get(me))
}

/// POST /api/v1/signup
async fn signup(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignupRequest>,
) -> ApiResult<Json<SignupResponse>> {
    let resp = IdentityService::signup(state.store(), state.jwt(), req).await?;
    Ok(Json(resp))
}

/// POST /api/v1/login
async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = IdentityService::login(state.store(), state.jwt(), req).await?;
    Ok(Json(tokens))
}

/// POST /api/v1/refresh
async fn refresh_token(
    State(state): State<AppState>,
    AppJson(req): AppJson<RefreshTokenRequest>,
) -> ApiResult<Json<AuthTokens>> {
    let tokens = IdentityService::refresh(state.store(), state.jwt(), &req.refresh_token).await?;
    Ok(Json(tokens))
}

/// GET /api/v1/me
async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<AccountSummary>> {
    let account = IdentityService::me(state.store(), auth.user_id).await?;
    Ok(Json(account))
}
