//! Layered runtime configuration.
//!
//! Values are resolved from built-in defaults, then an optional TOML file,
//! then `CALENDAR__`-prefixed environment variables, with later sources
//! taking precedence. Nested keys use `__` as the separator, so
//! `CALENDAR__DATABASE__URL` sets `database.url`.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::net::SocketAddr;

/// Environment variable naming an alternative configuration file.
pub const CONFIG_PATH_ENV: &str = "CALENDAR_CONFIG";

/// Configuration file read when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "calendar.toml";

/// Complete application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Database connection settings.
    pub database: DatabaseSettings,
    /// Log output settings.
    pub log: LogSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Origins allowed by CORS. When empty, the request origin is echoed.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl ServerSettings {
    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Message`] when `host:port` is not a valid
    /// socket address.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|err| ConfigError::Message(format!("invalid server address: {err}")))
    }
}

/// Database connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Settings {
    /// Loads settings from the configuration file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be read or a required
    /// value such as `database.url` is missing.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        let builder = with_defaults(Config::builder())?
            .add_source(File::new(&path, FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("CALENDAR")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );
        builder.build()?.try_deserialize()
    }

    /// Builds settings from a TOML document layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed or lacks a
    /// required value.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        with_defaults(Config::builder())?
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8081)?
        .set_default("server.allowed_origins", Vec::<String>::new())?
        .set_default("database.max_connections", 10)?
        .set_default("log.filter", "info")
}
