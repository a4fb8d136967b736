//! Content service configuration.

use std::env;

use common::DatabaseConfig;

/// Content service configuration.
///
/// Listen host and port come from the `serve` arguments
/// (`CONTENT_SERVICE_HOST`, `CONTENT_SERVICE_PORT`).
#[derive(Debug, Clone)]
pub struct ContentServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl ContentServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup.
    ///
    /// `CONTENT_SERVICE_DATABASE_URL` wins over `DATABASE_URL`; unset or
    /// unparsable pool sizes fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: lookup("CONTENT_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: lookup("DATABASE_MIN_CONNECTIONS")
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }
}
