//! Coach chat routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::AppJson;
use crate::services::CoachService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitkro_shared::{ChatHistoryResponse, ChatRequest, ChatResponse};

pub fn coach_routes() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/history", get(chat_history))
}

/// POST /api/v1/coach/chat
async fn chat(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(req): AppJson<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let response =
        CoachService::chat(state.store(), state.coach.as_ref(), auth.user_id, &req.message).await?;
    Ok(Json(ChatResponse { response }))
}

/// GET /api/v1/coach/history
async fn chat_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ChatHistoryResponse>> {
    let messages = CoachService::history(state.store(), auth.user_id).await?;
    Ok(Json(ChatHistoryResponse { messages }))
}
