//! Calendar tasks: an HTTP backend for day-based task lists.
//!
//! Tasks are created singly or as weekly series, listed per calendar day,
//! toggled between pending and completed, and deleted.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, adapters and service
//! - [`api`]: axum router and JSON payloads
//! - [`config`]: Layered settings
//! - [`database`]: Connection pool and schema bootstrap
//! - [`server`]: Process wiring
//! - [`telemetry`]: Tracing setup

pub mod api;
pub mod config;
pub mod database;
pub mod server;
pub mod task;
pub mod telemetry;
