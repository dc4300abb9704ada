//! # Web API Error Types
//!
//! Error types specific to the web API and their HTTP response
//! conversions. Built on thiserror for structure and axum's
//! `IntoResponse` for the HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::WorkflowError;

/// Web API errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found")]
    NotFound,

    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Create a BadRequest error with a custom message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found"),

            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.as_str())
            }

            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error",
            ),
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}

/// Default mapping from core failures to HTTP responses.
///
/// Not-found lookups become 404, invariant breaches become 500, and every
/// other core failure is a 400 carrying its message. Handlers that need a
/// route-specific mapping (start-instance, execute-action) build the
/// `ApiError` themselves instead of going through this conversion.
impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::DefinitionNotFound { .. } | WorkflowError::InstanceNotFound { .. } => {
                ApiError::NotFound
            }
            WorkflowError::Internal(_) | WorkflowError::Configuration(_) => ApiError::Internal,
            other => ApiError::bad_request(other.to_string()),
        }
    }
}

/// Result type alias for web API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(WorkflowError::DefinitionNotFound {
            id: "def-1".to_string(),
        });
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn test_transition_failures_map_to_bad_request() {
        let err = ApiError::from(WorkflowError::TerminalState {
            state_id: "completed".to_string(),
        });
        match err {
            ApiError::BadRequest { message } => assert!(message.contains("completed")),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_internal_faults_map_to_500() {
        let err = ApiError::from(WorkflowError::internal("broken invariant"));
        assert!(matches!(err, ApiError::Internal));
    }
}
