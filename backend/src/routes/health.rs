//! Health check endpoints
//!
//! - /health - Basic health check
//! - /health/ready - Readiness probe (checks the store)
//! - /health/live - Liveness probe

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub store: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn status(status: &str, checks: Option<HealthChecks>) -> HealthResponse {
    HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(status("healthy", None))
}

/// Returns 503 while the store is unreachable
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match state.store().health_check().await {
        Ok(()) => Ok(Json(status(
            "ready",
            Some(HealthChecks {
                store: CheckStatus {
                    status: "healthy".to_string(),
                    message: None,
                },
            }),
        ))),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(status(
                "not_ready",
                Some(HealthChecks {
                    store: CheckStatus {
                        status: "unhealthy".to_string(),
                        message: Some(e.to_string()),
                    },
                }),
            )),
        )),
    }
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(status("alive", None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_returns_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
        assert!(!response.version.is_empty());
    }

    #[tokio::test]
    async fn test_liveness_check_returns_alive() {
        assert_eq!(liveness_check().await.status, "alive");
    }
}
