//! Integration tests for profile endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_get_profile_requires_auth() {
    let app = common::TestApp::new();
    let (status, _) = app.get("/api/v1/profile").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_profile_merges_fields() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;

    let body = json!({ "weight": 68.5, "goal": "maintain" });
    let (status, response) = app
        .put_auth("/api/v1/profile", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    let profile = &response["profile"];
    assert_eq!(profile["weight"], 68.5);
    assert_eq!(profile["goal"], "maintain");
    // Untouched fields survive
    assert_eq!(profile["height"], 175.0);
    assert_eq!(profile["age"], 30);
    assert!(profile["updatedAt"].is_string());

    let stored = app.get_json("/api/v1/profile", &user.access_token).await;
    assert_eq!(stored["profile"]["weight"], 68.5);
}

#[tokio::test]
async fn test_update_profile_accepts_numeric_strings() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;

    let body = json!({ "height": "180", "age": "31" });
    let (status, response) = app
        .put_auth("/api/v1/profile", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK, "{}", response);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["profile"]["height"], 180.0);
    assert_eq!(response["profile"]["age"], 31);
}

#[tokio::test]
async fn test_update_profile_ignores_blank_choices() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;

    let body = json!({ "gender": "", "dietPreference": "", "activityLevel": "very" });
    let (status, response) = app
        .put_auth("/api/v1/profile", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK, "{}", response);
    let response: Value = serde_json::from_str(&response).unwrap();
    let profile = &response["profile"];
    assert_eq!(profile["activityLevel"], "very");
    // Blank choices leave the stored values alone
    assert_eq!(profile["gender"], "male");
    assert_eq!(profile["dietPreference"], "none");
}

#[tokio::test]
async fn test_update_profile_with_wrong_shape_is_bad_request() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;

    let (status, response) = app
        .put_auth("/api/v1/profile", "[1, 2, 3]", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::error_code(&response), "BAD_REQUEST");
}

#[tokio::test]
async fn test_update_profile_rejects_out_of_range_weight() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;

    let body = json!({ "weight": 900 });
    let (status, _) = app
        .put_auth("/api/v1/profile", &body.to_string(), &user.access_token)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_profile_is_per_user() {
    let app = common::TestApp::new();
    let first = app.create_test_user().await;
    let second = app
        .signup(json!({
            "email": "other@example.com",
            "password": "password123",
            "name": "Other"
        }))
        .await;

    let body = json!({ "weight": 90 });
    app.put_auth("/api/v1/profile", &body.to_string(), &second.access_token)
        .await;

    let first_profile = app.get_json("/api/v1/profile", &first.access_token).await;
    assert_eq!(first_profile["profile"]["weight"], 70.0);
}
