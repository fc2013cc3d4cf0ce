//! Application configuration loaded from environment variables.

use std::env;

use thiserror::Error;

use posts_core::NotFoundPolicy;
use posts_core::domain::ParsePolicyError;
use posts_infra::DatabaseConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    Port(String),

    #[error("NOT_FOUND_POLICY: {0}")]
    Policy(#[from] ParsePolicyError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub not_found: NotFoundPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database = var("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: var("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        });

        let port = match var("PORT") {
            Some(p) => p.parse().map_err(|_| ConfigError::Port(p))?,
            None => 8080,
        };

        let not_found = match var("NOT_FOUND_POLICY") {
            Some(p) => p.parse()?,
            None => NotFoundPolicy::default(),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            database,
            not_found,
        })
    }
}
