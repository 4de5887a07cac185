use thiserror::Error;

/// Input rejected before any storage access.
///
/// The display strings are returned to HTTP clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("title must be between 1 and 200 characters")]
    TitleTooLong,

    #[error("text cannot be empty")]
    EmptyText,

    #[error("text must be between 1 and 5000 characters")]
    TextTooLong,

    #[error("limit must be between 1 and 100")]
    InvalidLimit,
}

/// Errors related to chat and message operations.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("chat not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by trait definitions in chatapi-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyTitle.to_string(), "title cannot be empty");
        assert_eq!(
            ValidationError::InvalidLimit.to_string(),
            "limit must be between 1 and 100"
        );
    }

    #[test]
    fn test_chat_error_wraps_validation_transparently() {
        let err: ChatError = ValidationError::TextTooLong.into();
        assert_eq!(err.to_string(), "text must be between 1 and 5000 characters");
        assert!(matches!(err, ChatError::Validation(ValidationError::TextTooLong)));
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
