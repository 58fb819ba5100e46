//! Server configuration
//!
//! ServerConfig is rebuilt from the environment on every launch; nothing is
//! persisted. Unset (or empty) variables fall back to compiled defaults.
//!
//! # Environment Variables
//!
//! - `TASKGRAPH_HOST`: Bind address (default: 127.0.0.1)
//! - `TASKGRAPH_PORT`: Listen port (default: 8080)
//! - `TASKGRAPH_DB_PATH`: RocksDB directory; unset or `memory` keeps tasks in memory
//! - `TASKGRAPH_NAMESPACE` / `TASKGRAPH_DATABASE`: SurrealDB namespace and database
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use taskgraph_core::StoreConfig;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Value of `TASKGRAPH_DB_PATH` selecting the in-memory engine
pub const MEMORY_DB_PATH: &str = "memory";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("TASKGRAPH_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "TASKGRAPH_PORT",
                    value: raw,
                })?,
            None => DEFAULT_PORT,
        };

        let mut store = match var("TASKGRAPH_DB_PATH") {
            Some(path) if path != MEMORY_DB_PATH => StoreConfig::rocksdb(path),
            _ => StoreConfig::in_memory(),
        };
        if let Some(namespace) = var("TASKGRAPH_NAMESPACE") {
            store = store.with_namespace(namespace);
        }
        if let Some(database) = var("TASKGRAPH_DATABASE") {
            store = store.with_database(database);
        }

        Ok(Self {
            host: var("TASKGRAPH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            store,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            store: StoreConfig::in_memory(),
        }
    }
}
