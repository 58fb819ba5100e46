//! HTTP error handling
//!
//! Every failed request answers with a JSON body `{message, code}`. The status
//! follows the task error kind: not found is 404, invalid input is 400 and
//! everything else is 500.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use taskgraph_core::{ErrorKind, TaskError};

pub const TASK_NOT_FOUND: &str = "TASK_NOT_FOUND";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const DATA_CORRUPTION: &str = "DATA_CORRUPTION";

/// HTTP error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct HttpError {
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.code.as_str() {
            TASK_NOT_FOUND => StatusCode::NOT_FOUND,
            INVALID_INPUT => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<TaskError> for HttpError {
    fn from(err: TaskError) -> Self {
        let code = match err.kind() {
            ErrorKind::NotFound => TASK_NOT_FOUND,
            ErrorKind::InvalidInput => INVALID_INPUT,
            ErrorKind::StoreUnavailable => STORE_UNAVAILABLE,
            ErrorKind::DataCorruption => DATA_CORRUPTION,
        };

        if code == STORE_UNAVAILABLE || code == DATA_CORRUPTION {
            tracing::error!("❌ Task operation failed: {:?}", err);
        }

        HttpError::new(err.to_string(), code)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::new(
            format!("Invalid request payload: {}", rejection.body_text()),
            INVALID_INPUT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskgraph_core::StoreError;

    #[test]
    fn test_status_mapping_follows_error_kind() {
        let not_found = HttpError::from(TaskError::not_found("t1"));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.code, TASK_NOT_FOUND);

        let invalid = HttpError::from(TaskError::invalid_input("bad"));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let store = HttpError::from(TaskError::from(StoreError::ReadOnlySession));
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.code, STORE_UNAVAILABLE);

        let corrupt = HttpError::from(TaskError::data_corruption("title", "expected string"));
        assert_eq!(corrupt.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(corrupt.code, DATA_CORRUPTION);
    }
}
