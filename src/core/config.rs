//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Document store connection settings.
    pub database: DatabaseConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// MongoDB connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,

    /// Name of the database to select after connecting.
    pub database: String,

    /// Server selection timeout in seconds. Driver default when unset.
    pub timeout_secs: Option<u64>,
}

/// Custom Debug implementation to redact the password from logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DatabaseConfig {
    /// Build the `mongodb://` connection string.
    ///
    /// Credentials are not part of the string; they are set on the client
    /// options so they never need URL encoding.
    pub fn connection_uri(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27017,
            username: "admin".to_string(),
            password: "admin".to_string(),
            database: "langbox".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "langbox-mongodb".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            database: DatabaseConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`). Store settings use the `MONGODB_`
    /// prefix (`MONGODB_HOST`, `MONGODB_PORT`, `MONGODB_USER`,
    /// `MONGODB_PASSWORD`, `MONGODB_DB`, `MONGODB_TIMEOUT_SECS`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.database = DatabaseConfig::from_env();

        config
    }
}

impl DatabaseConfig {
    /// Load store settings, falling back to defaults per field.
    pub fn from_env() -> Self {
        let mut db = Self::default();

        if let Ok(host) = std::env::var("MONGODB_HOST") {
            db.host = host;
        }

        if let Ok(port) = std::env::var("MONGODB_PORT") {
            match port.parse() {
                Ok(port) => db.port = port,
                Err(_) => warn!("Invalid MONGODB_PORT '{}', using {}", port, db.port),
            }
        }

        if let Ok(user) = std::env::var("MONGODB_USER") {
            db.username = user;
        }

        if let Ok(password) = std::env::var("MONGODB_PASSWORD") {
            db.password = password;
        } else {
            warn!("MONGODB_PASSWORD not set - using the default password");
        }

        if let Ok(name) = std::env::var("MONGODB_DB") {
            db.database = name;
        }

        if let Ok(timeout) = std::env::var("MONGODB_TIMEOUT_SECS") {
            db.timeout_secs = timeout.parse().ok();
        }

        info!(
            "Document store: {}:{} database '{}'",
            db.host, db.port, db.database
        );

        db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const DB_VARS: [&str; 6] = [
        "MONGODB_HOST",
        "MONGODB_PORT",
        "MONGODB_USER",
        "MONGODB_PASSWORD",
        "MONGODB_DB",
        "MONGODB_TIMEOUT_SECS",
    ];

    fn clear_db_vars() {
        for var in DB_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_database_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_db_vars();
        let db = DatabaseConfig::from_env();
        assert_eq!(db.host, "localhost");
        assert_eq!(db.port, 27017);
        assert_eq!(db.database, "langbox");
        assert_eq!(db.timeout_secs, None);
        assert_eq!(db.username, "admin");
        assert_eq!(db.connection_uri(), "mongodb://localhost:27017");
    }

    #[test]
    fn test_database_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_db_vars();
        unsafe {
            std::env::set_var("MONGODB_HOST", "db.internal");
            std::env::set_var("MONGODB_PORT", "27018");
            std::env::set_var("MONGODB_USER", "reader");
            std::env::set_var("MONGODB_PASSWORD", "s3cret");
            std::env::set_var("MONGODB_DB", "assistant");
            std::env::set_var("MONGODB_TIMEOUT_SECS", "5");
        }
        let db = DatabaseConfig::from_env();
        clear_db_vars();

        assert_eq!(db.connection_uri(), "mongodb://db.internal:27018");
        assert_eq!(db.username, "reader");
        assert_eq!(db.password, "s3cret");
        assert_eq!(db.database, "assistant");
        assert_eq!(db.timeout_secs, Some(5));
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_db_vars();
        unsafe {
            std::env::set_var("MONGODB_PORT", "not-a-port");
        }
        let db = DatabaseConfig::from_env();
        clear_db_vars();
        assert_eq!(db.port, 27017);
    }

    #[test]
    fn test_uri_never_contains_credentials() {
        let db = DatabaseConfig {
            username: "ad:min".to_string(),
            password: "p@ss:w/rd%".to_string(),
            ..DatabaseConfig::default()
        };
        assert_eq!(db.connection_uri(), "mongodb://localhost:27017");
    }

    #[test]
    fn test_password_redacted_in_debug() {
        let db = DatabaseConfig {
            password: "super_secret_password".to_string(),
            ..DatabaseConfig::default()
        };
        let debug_str = format!("{:?}", db);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_password"));
    }

    #[test]
    fn test_config_default_server_name() {
        let config = Config::default();
        assert_eq!(config.server.name, "langbox-mongodb");
        assert_eq!(config.logging.level, "info");
    }
}
