//! Process wiring: database, service, router and listener.

use crate::{
    api,
    config::Settings,
    database::{self, DatabaseError},
    task::{adapters::postgres::PostgresTaskRepository, services::TaskLifecycleService},
};
use axum::http::header::InvalidHeaderValue;
use config::ConfigError;
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Settings were invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The database could not be prepared.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// A configured CORS origin is not a valid header value.
    #[error("invalid CORS origin: {0}")]
    Cors(#[from] InvalidHeaderValue),

    /// Binding or serving failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the HTTP server until Ctrl-C is received.
///
/// # Errors
///
/// Returns [`StartupError`] when the schema cannot be applied, the listener
/// cannot be bound, or serving fails.
pub async fn run(settings: Settings) -> Result<(), StartupError> {
    let address = settings.server.bind_address()?;
    let cors = api::cors_layer(&settings.server.allowed_origins)?;

    let pool = database::build_pool(&settings.database);
    database::apply_schema(&pool).await?;
    info!("database schema ready");

    let repository = Arc::new(PostgresTaskRepository::new(pool));
    let service = TaskLifecycleService::new(repository, Arc::new(DefaultClock));
    let app = api::router(service, cors);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
