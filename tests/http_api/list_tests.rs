//! `GET /api/tasks?date=` tests.

use super::helpers::{app, assert_error, create, send};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_shows_weekday_for_recurring_tasks_only(app: Router) {
    create(
        &app,
        &json!({"title": "Once", "task_day": "2024-01-08", "task_day_time": "08:00"}),
    )
    .await;
    create(
        &app,
        &json!({
            "title": "Weekly",
            "task_day": "2024-01-01",
            "task_day_time": "09:00",
            "is_recurring": true,
            "week_count": 2,
            "weekday": 1,
        }),
    )
    .await;

    let response = send(&app, Method::GET, "/api/tasks?date=2024-01-08", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let entries = response.body.as_array().expect("array body");
    assert_eq!(entries.len(), 2);

    let once = entries
        .iter()
        .find(|entry| entry["title"] == "Once")
        .expect("single task listed");
    assert!(once["completed_at"].is_null());
    assert!(once.get("weekday").is_none());
    assert!(once.get("weekday_name").is_none());

    let weekly = entries
        .iter()
        .find(|entry| entry["title"] == "Weekly")
        .expect("occurrence listed");
    assert_eq!(weekly["weekday"], 1);
    assert_eq!(weekly["weekday_name"], "周一");
    assert_eq!(weekly["task_day"], "2024-01-08");
    assert_eq!(weekly["week_count"], 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_day_lists_as_empty_array(app: Router) {
    let response = send(&app, Method::GET, "/api/tasks?date=2031-12-31", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[rstest]
#[case("/api/tasks", "date parameter is required")]
#[case("/api/tasks?date=", "date parameter is required")]
#[case("/api/tasks?date=2024-02-30", "invalid date format")]
#[case("/api/tasks?date=yesterday", "invalid date format")]
#[case("/api/tasks?date=2024-1-1", "invalid date format")]
#[tokio::test(flavor = "multi_thread")]
async fn missing_or_invalid_date_is_rejected(
    app: Router,
    #[case] uri: &str,
    #[case] message: &str,
) {
    let response = send(&app, Method::GET, uri, None).await;

    assert_error(&response, StatusCode::BAD_REQUEST, message);
}
