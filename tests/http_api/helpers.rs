//! Shared helpers for router-level tests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use calendar_tasks::{
    api,
    task::{adapters::memory::InMemoryTaskRepository, ports::TaskRepository, services::TaskLifecycleService},
};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use tower::ServiceExt;

/// Router backed by a fresh in-memory repository, with permissive CORS.
#[fixture]
pub fn app() -> Router {
    app_with(InMemoryTaskRepository::new())
}

/// Builds the router around `repository`.
pub fn app_with<R>(repository: R) -> Router
where
    R: TaskRepository + 'static,
{
    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    let cors = api::cors_layer(&[]).expect("empty origin list is valid");
    api::router(service, cors)
}

/// Response status and decoded JSON body.
pub struct JsonResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Sends a request with an optional raw body and decodes the JSON reply.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> JsonResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(raw) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw.to_owned())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    JsonResponse { status, body }
}

/// Sends a JSON value as the request body.
pub async fn send_json(app: &Router, method: Method, uri: &str, body: &Value) -> JsonResponse {
    send(app, method, uri, Some(&body.to_string())).await
}

/// Creates a task through the API and returns the response body.
pub async fn create(app: &Router, body: &Value) -> Value {
    let response = send_json(app, Method::POST, "/api/tasks", body).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body
}

/// Asserts an error response with the given status and message.
pub fn assert_error(response: &JsonResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status, status, "{}", response.body);
    assert_eq!(response.body["error"], message);
}
