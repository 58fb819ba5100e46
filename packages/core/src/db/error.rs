//! Graph Store Error Types
//!
//! Infrastructure failures raised while opening the store or running
//! transactions. The task layer wraps these as
//! [`TaskError::StoreUnavailable`](crate::error::TaskError::StoreUnavailable).

use thiserror::Error;

/// Graph store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the storage engine
    #[error("Failed to connect to graph store at {location}: {source}")]
    ConnectionFailed {
        location: String,
        source: surrealdb::Error,
    },

    /// Failed to define the task tables
    #[error("Failed to initialize graph schema: {0}")]
    InitializationFailed(String),

    /// Failed to create the directory holding an on-disk store
    #[error("Failed to create store directory: {0}")]
    DirectoryCreationFailed(#[from] std::io::Error),

    /// Statement or transaction rejected by SurrealDB
    #[error("Graph query failed: {0}")]
    QueryFailed(#[from] surrealdb::Error),

    /// A write was issued on a session opened in read mode
    #[error("Write attempted on a read-only session")]
    ReadOnlySession,

    /// Two statements of one transaction bound the same parameter differently
    #[error("Parameter '${name}' bound to conflicting values within one transaction")]
    ConflictingParameter { name: String },
}

impl StoreError {
    /// Create a connection failed error
    pub fn connection_failed(location: impl Into<String>, source: surrealdb::Error) -> Self {
        Self::ConnectionFailed {
            location: location.into(),
            source,
        }
    }

    /// Create an initialization failed error
    pub fn initialization_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }

    /// Create a conflicting parameter error
    pub fn conflicting_parameter(name: impl Into<String>) -> Self {
        Self::ConflictingParameter { name: name.into() }
    }
}
