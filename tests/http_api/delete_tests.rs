//! `DELETE /api/tasks/{id}` tests.

use super::helpers::{app, assert_error, create, send};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_succeeds_both_times(app: Router) {
    let body = create(
        &app,
        &json!({"title": "Call", "task_day": "2024-01-01", "task_day_time": "11:00"}),
    )
    .await;
    let uri = format!("/api/tasks/{}", body["id"]);

    for _ in 0..2 {
        let response = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, json!({"message": "Task deleted successfully"}));
    }

    let listing = send(&app, Method::GET, "/api/tasks?date=2024-01-01", None).await;
    assert_eq!(listing.body, json!([]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_series_original_keeps_occurrences(app: Router) {
    let body = create(
        &app,
        &json!({
            "title": "Class",
            "task_day": "2024-01-01",
            "task_day_time": "19:00",
            "is_recurring": true,
            "week_count": 2,
            "weekday": 4,
        }),
    )
    .await;
    let original_id = &body["tasks"][0]["id"];

    let response = send(&app, Method::DELETE, &format!("/api/tasks/{original_id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let listing = send(&app, Method::GET, "/api/tasks?date=2024-01-11", None).await;
    assert_eq!(listing.body.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_with_invalid_id_is_rejected(app: Router) {
    let response = send(&app, Method::DELETE, "/api/tasks/one", None).await;

    assert_error(&response, StatusCode::BAD_REQUEST, "invalid task id");
}
