//! Common test utilities for integration tests
//!
//! Every `TestApp` runs against its own in-memory store, so tests are
//! isolated without any external services.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitkro_backend::{
    config::{AppConfig, JwtConfig},
    repositories::MemoryKvStore,
    routes,
    state::AppState,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub store: Arc<MemoryKvStore>,
}

/// A signed-up user and its tokens
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryKvStore::new());
        let state = AppState::new(store.clone(), test_config());
        let app = routes::create_router(state);
        Self { app, store }
    }

    /// Build an app around a customized state
    pub fn with_state(store: Arc<MemoryKvStore>, state: AppState) -> Self {
        Self {
            app: routes::create_router(state),
            store,
        }
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
        token: Option<&str>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(path);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body), None).await
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.send("GET", path, None, Some(token)).await
    }

    pub async fn post_auth(&self, path: &str, body: &str, token: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body), Some(token)).await
    }

    pub async fn put_auth(&self, path: &str, body: &str, token: &str) -> (StatusCode, String) {
        self.send("PUT", path, Some(body), Some(token)).await
    }

    /// GET with auth, asserting 200 and parsing the body
    pub async fn get_json(&self, path: &str, token: &str) -> Value {
        let (status, body) = self.get_auth(path, token).await;
        assert_eq!(status, StatusCode::OK, "GET {} failed: {}", path, body);
        serde_json::from_str(&body).unwrap()
    }

    /// POST with auth, asserting 200 and parsing the body
    pub async fn post_json(&self, path: &str, body: Value, token: &str) -> Value {
        let (status, response) = self.post_auth(path, &body.to_string(), token).await;
        assert_eq!(status, StatusCode::OK, "POST {} failed: {}", path, response);
        serde_json::from_str(&response).unwrap()
    }

    /// Sign up a user with a complete profile
    pub async fn create_test_user(&self) -> TestUser {
        self.signup(json!({
            "email": "test@example.com",
            "password": "password123",
            "name": "Test User",
            "gender": "male",
            "age": 30,
            "height": 175,
            "weight": 70,
            "goal": "lose",
            "activityLevel": "moderate",
            "dietPreference": "none"
        }))
        .await
    }

    pub async fn signup(&self, body: Value) -> TestUser {
        let (status, response) = self.post("/api/v1/signup", &body.to_string()).await;
        assert_eq!(status, StatusCode::OK, "signup failed: {}", response);

        let response: Value = serde_json::from_str(&response).unwrap();
        TestUser {
            id: response["user"]["id"].as_str().unwrap().to_string(),
            email: response["user"]["email"].as_str().unwrap().to_string(),
            access_token: response["tokens"]["accessToken"]
                .as_str()
                .unwrap()
                .to_string(),
            refresh_token: response["tokens"]["refreshToken"]
                .as_str()
                .unwrap()
                .to_string(),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        jwt: JwtConfig {
            secret: "test-secret-key-for-testing-only-32chars".to_string(),
            access_token_expiry_secs: 3600,
            refresh_token_expiry_secs: 86400,
        },
        ..AppConfig::default()
    }
}

/// Parse an error body and return its code
pub fn error_code(body: &str) -> String {
    let value: Value = serde_json::from_str(body).unwrap();
    value["error"]["code"].as_str().unwrap_or_default().to_string()
}
