//! CORS preflight tests.

use super::helpers::app;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use rstest::rstest;
use tower::ServiceExt;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn preflight_is_no_content_and_echoes_origin_with_credentials(app: Router) {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/tasks/1")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .expect("valid request");

    let response = app.oneshot(request).await.expect("router is infallible");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&header::HeaderValue::from_static("http://localhost:5173"))
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        Some(&header::HeaderValue::from_static("true"))
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_MAX_AGE),
        Some(&header::HeaderValue::from_static("3600"))
    );
    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|value| value.to_str().ok())
        .expect("allowed methods header");
    assert!(methods.contains("PUT"));
    assert!(methods.contains("DELETE"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn plain_options_request_is_not_rewritten(app: Router) {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/tasks")
        .body(Body::empty())
        .expect("valid request");

    let response = app.oneshot(request).await.expect("router is infallible");

    assert_ne!(response.status(), StatusCode::NO_CONTENT);
}

#[rstest]
fn configured_origins_must_be_valid_header_values() {
    let origins = vec!["http://ok.example".to_owned(), "bad\norigin".to_owned()];

    assert!(calendar_tasks::api::cors_layer(&origins).is_err());
}
