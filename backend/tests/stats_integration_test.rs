//! Integration tests for daily stats and progress

mod common;

use chrono::{Duration, SecondsFormat, Utc};
use serde_json::json;

#[tokio::test]
async fn test_daily_stats_for_a_given_day() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;

    app.post_json(
        "/api/v1/food/log",
        json!({ "foodName": "Thali", "calories": 700, "meal": "lunch", "date": "2026-10-15T13:00:00Z" }),
        &user.access_token,
    )
    .await;
    app.post_json(
        "/api/v1/food/log",
        json!({ "foodName": "Chai", "calories": 90, "meal": "snacks", "date": "2026-10-15T17:00:00Z" }),
        &user.access_token,
    )
    .await;
    app.post_json(
        "/api/v1/workouts/log",
        json!({ "workoutId": "3", "duration": 25, "caloriesBurned": 210, "exercises": [], "date": "2026-10-15T06:00:00Z" }),
        &user.access_token,
    )
    .await;

    let stats = app
        .get_json("/api/v1/stats?date=2026-10-15", &user.access_token)
        .await;

    assert_eq!(stats["date"], "2026-10-15");
    assert_eq!(stats["caloriesConsumed"], 790.0);
    assert_eq!(stats["caloriesBurned"], 210.0);
    assert_eq!(stats["workoutCompleted"], true);
    let steps = stats["steps"].as_u64().unwrap();
    assert!((3000..8000).contains(&steps));
}

#[tokio::test]
async fn test_daily_stats_empty_day() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;

    let stats = app
        .get_json("/api/v1/stats?date=2020-01-01", &user.access_token)
        .await;

    assert_eq!(stats["caloriesConsumed"], 0.0);
    assert_eq!(stats["workoutCompleted"], false);
}

#[tokio::test]
async fn test_daily_stats_defaults_to_today() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;

    let stats = app.get_json("/api/v1/stats", &user.access_token).await;

    // Tolerate a run that crosses midnight UTC
    let date = stats["date"].as_str().unwrap().to_string();
    let today = Utc::now().date_naive();
    assert!(date == today.to_string() || date == (today - Duration::days(1)).to_string());
}

#[tokio::test]
async fn test_progress_summary() {
    let app = common::TestApp::new();
    let user = app.create_test_user().await;
    let now = Utc::now();

    for (weight, days_ago) in [(75.0, 30), (72.5, 10), (70.0, 1)] {
        let date = (now - Duration::days(days_ago)).to_rfc3339_opts(SecondsFormat::Millis, true);
        app.post_json(
            "/api/v1/weight/log",
            json!({ "weight": weight, "date": date }),
            &user.access_token,
        )
        .await;
    }
    for (calories, days_ago) in [(300, 2), (200, 3), (100, 20)] {
        let date = (now - Duration::days(days_ago)).to_rfc3339_opts(SecondsFormat::Millis, true);
        app.post_json(
            "/api/v1/workouts/log",
            json!({ "workoutId": "1", "duration": 30, "caloriesBurned": calories, "exercises": [], "date": date }),
            &user.access_token,
        )
        .await;
    }

    let progress = app
        .get_json("/api/v1/stats/progress", &user.access_token)
        .await;

    // 70 kg at 175 cm
    assert_eq!(progress["bmi"]["value"], 22.9);
    assert_eq!(progress["bmi"]["category"], "normal");
    assert_eq!(progress["weightChange"]["change"], 5.0);
    assert_eq!(progress["weightChange"]["trend"], "down");
    assert_eq!(progress["weeklyWorkouts"], 2);
    assert_eq!(progress["totalWorkouts"], 3);
    assert_eq!(progress["totalCaloriesBurned"], 600.0);
}

#[tokio::test]
async fn test_progress_without_data() {
    let app = common::TestApp::new();
    let user = app
        .signup(json!({
            "email": "fresh@example.com",
            "password": "password123",
            "name": "Fresh"
        }))
        .await;

    let progress = app
        .get_json("/api/v1/stats/progress", &user.access_token)
        .await;

    assert!(progress["bmi"].is_null());
    assert_eq!(progress["weightChange"]["trend"], "stable");
    assert_eq!(progress["weeklyWorkouts"], 0);
}
