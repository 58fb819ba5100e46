//! Store Configuration
//!
//! Where the embedded graph store keeps its data and which namespace/database
//! pair the task tables live in. Built explicitly and passed to
//! [`SurrealGraphStore::connect`](crate::db::SurrealGraphStore::connect); there is
//! no process-wide store handle.

use std::path::PathBuf;

/// Default SurrealDB namespace for task data
pub const DEFAULT_NAMESPACE: &str = "taskgraph";

/// Default SurrealDB database for task data
pub const DEFAULT_DATABASE: &str = "tasks";

/// Storage engine selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Volatile in-memory engine (`kv-mem`)
    Memory,
    /// On-disk RocksDB directory (`kv-rocksdb`)
    RocksDb(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub location: StoreLocation,
    pub namespace: String,
    pub database: String,
}

impl StoreConfig {
    /// In-memory store with the default namespace and database.
    pub fn in_memory() -> Self {
        Self {
            location: StoreLocation::Memory,
            namespace: DEFAULT_NAMESPACE.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }

    /// RocksDB store at `path` with the default namespace and database.
    pub fn rocksdb(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StoreLocation::RocksDb(path.into()),
            ..Self::in_memory()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}
