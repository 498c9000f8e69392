//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// Store connection strings are optional: an unset or blank value disables
/// that store entirely (no client, no index creation).
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string for the primary store
    pub mongodb_uri: Option<String>,
    /// Database holding the note collection
    pub mongodb_database: String,
    /// Collection holding canonical note records
    pub mongodb_collection: String,
    /// Redis Stack connection string for the cache store
    pub redis_uri: Option<String>,
    /// Name of the RediSearch index over cached notes
    pub redis_index: String,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MONGODB_URI` - Primary store connection string (unset: disabled)
    /// - `MONGODB_DATABASE` - Database name (default: test)
    /// - `MONGODB_COLLECTION` - Collection name (default: note)
    /// - `REDIS_URI` - Cache store connection string (unset: disabled)
    /// - `REDIS_INDEX` - RediSearch index name (default: note-idx)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            mongodb_uri: connection_string("MONGODB_URI"),
            mongodb_database: env::var("MONGODB_DATABASE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.mongodb_database),
            mongodb_collection: env::var("MONGODB_COLLECTION")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.mongodb_collection),
            redis_uri: connection_string("REDIS_URI"),
            redis_index: env::var("REDIS_INDEX")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.redis_index),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }
}

/// Reads a connection string, treating blank values as absent.
fn connection_string(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_uri: None,
            mongodb_database: "test".to_string(),
            mongodb_collection: "note".to_string(),
            redis_uri: None,
            redis_index: "note-idx".to_string(),
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.mongodb_uri.is_none());
        assert!(config.redis_uri.is_none());
        assert_eq!(config.mongodb_database, "test");
        assert_eq!(config.mongodb_collection, "note");
        assert_eq!(config.redis_index, "note-idx");
        assert_eq!(config.server_port, 3000);
    }

    // Single test touches the process environment so parallel tests don't race on it.
    #[test]
    fn test_config_from_env() {
        env::remove_var("MONGODB_DATABASE");
        env::remove_var("MONGODB_COLLECTION");
        env::remove_var("REDIS_INDEX");
        env::remove_var("SERVER_PORT");

        env::set_var("MONGODB_URI", "   ");
        env::remove_var("REDIS_URI");
        let config = Config::from_env();
        assert!(config.mongodb_uri.is_none(), "blank URI disables the store");
        assert!(config.redis_uri.is_none());
        assert_eq!(config.mongodb_database, "test");
        assert_eq!(config.server_port, 3000);

        env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        env::set_var("REDIS_URI", " redis://localhost:6379 ");
        let config = Config::from_env();
        assert_eq!(
            config.mongodb_uri.as_deref(),
            Some("mongodb://localhost:27017")
        );
        assert_eq!(config.redis_uri.as_deref(), Some("redis://localhost:6379"));

        env::remove_var("MONGODB_URI");
        env::remove_var("REDIS_URI");
    }
}
