//! Task Error Kinds
//!
//! The error kinds the core surfaces to its callers. The transport layer maps
//! them to user-visible outcomes through [`TaskError::kind`].

use crate::db::StoreError;
use thiserror::Error;

/// Result alias for task operations
pub type TaskResult<T> = Result<T, TaskError>;

/// Errors returned by the repository and the façade
#[derive(Error, Debug)]
pub enum TaskError {
    /// Requested task id has no matching node (reads only)
    #[error("Task not found: {id}")]
    NotFound { id: String },

    /// Input rejected before reaching the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Store transaction failed; never retried internally
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// A row could not be mapped into a task
    #[error("Data corruption in field '{field}': {reason}")]
    DataCorruption { field: String, reason: String },
}

/// Coarse classification of [`TaskError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    StoreUnavailable,
    DataCorruption,
}

impl TaskError {
    /// Create a not found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a data corruption error naming the offending field
    pub fn data_corruption(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataCorruption {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            Self::DataCorruption { .. } => ErrorKind::DataCorruption,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(TaskError::not_found("t1").kind(), ErrorKind::NotFound);
        assert_eq!(
            TaskError::invalid_input("bad").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            TaskError::from(StoreError::ReadOnlySession).kind(),
            ErrorKind::StoreUnavailable
        );
        assert_eq!(
            TaskError::data_corruption("title", "expected string").kind(),
            ErrorKind::DataCorruption
        );
    }

    #[test]
    fn test_data_corruption_message_names_field() {
        let err = TaskError::data_corruption("completed", "expected boolean, found \"yes\"");
        assert_eq!(
            err.to_string(),
            "Data corruption in field 'completed': expected boolean, found \"yes\""
        );
    }
}
