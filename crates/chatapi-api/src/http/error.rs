//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the shape `{"error": "<message>"}`. Storage failures
//! are logged in full but answered with a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use chatapi_types::error::{ChatError, ValidationError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat-related errors from the service layer.
    Chat(ChatError),
    /// Malformed request: bad path id or unparseable body.
    BadRequest(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Chat(ChatError::Validation(e))
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Chat(ChatError::Validation(e)) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Chat(ChatError::NotFound) => {
                (StatusCode::NOT_FOUND, "chat not found".to_string())
            }
            AppError::Chat(ChatError::Storage(detail)) => {
                tracing::error!(error = %detail, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), error = %message, "request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let (status, msg) = AppError::from(ValidationError::EmptyTitle).status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "title cannot be empty");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, msg) = AppError::from(ChatError::NotFound).status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "chat not found");
    }

    #[test]
    fn test_storage_detail_is_not_leaked() {
        let err = AppError::from(ChatError::Storage("UNIQUE constraint failed".to_string()));
        let (status, msg) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!msg.contains("UNIQUE"));
    }
}
