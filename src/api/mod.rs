//! HTTP JSON API under `/api`.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | `POST` | `/api/tasks` | [`handlers::tasks::create_task`] |
//! | `GET` | `/api/tasks?date=YYYY-MM-DD` | [`handlers::tasks::list_tasks`] |
//! | `PUT` | `/api/tasks/{id}` | [`handlers::tasks::update_task_status`] |
//! | `DELETE` | `/api/tasks/{id}` | [`handlers::tasks::delete_task`] |

pub mod error;
pub mod handlers;
pub mod state;

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use axum::{
    Router,
    extract::Request,
    http::{
        HeaderName, HeaderValue, Method, StatusCode,
        header::{
            ACCEPT, ACCESS_CONTROL_REQUEST_METHOD, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE,
            InvalidHeaderValue, ORIGIN,
        },
    },
    middleware::{self, Next},
    response::Response,
    routing::{post, put},
};
use mockable::Clock;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub use error::ApiError;
pub use state::AppState;

/// How long browsers may cache a preflight response.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Builds the task routes around `service`.
pub fn task_routes<R, C>(service: TaskLifecycleService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/tasks",
            post(handlers::tasks::create_task::<R, C>).get(handlers::tasks::list_tasks::<R, C>),
        )
        .route(
            "/tasks/{id}",
            put(handlers::tasks::update_task_status::<R, C>)
                .delete(handlers::tasks::delete_task::<R, C>),
        )
        .with_state(AppState::new(service))
}

/// Builds the complete application router with request tracing and CORS.
///
/// Answered preflight requests carry `204 No Content`.
pub fn router<R, C>(service: TaskLifecycleService<R, C>, cors: CorsLayer) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .nest("/api", task_routes(service))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(preflight_no_content))
}

/// Rewrites the `200 OK` that [`CorsLayer`] gives preflights to `204`.
async fn preflight_no_content(request: Request, next: Next) -> Response {
    let preflight = request.method() == Method::OPTIONS
        && request.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD);
    let mut response = next.run(request).await;
    if preflight && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}

/// Builds the CORS policy for browser clients.
///
/// With no configured origins the request `Origin` is echoed back, which
/// together with credentials support suits a locally served front end.
///
/// # Errors
///
/// Returns [`InvalidHeaderValue`] when a configured origin is not a valid
/// header value.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            ACCEPT,
            ORIGIN,
        ])
        .allow_credentials(true)
        .expose_headers([CONTENT_LENGTH, CONTENT_TYPE, AUTHORIZATION])
        .max_age(PREFLIGHT_MAX_AGE))
}
