//! Query parameter extractors.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use chatapi_types::error::ValidationError;

use crate::http::error::AppError;

/// Query parameters for `GET /chats/{id}`.
///
/// `limit` is kept as raw text so a non-numeric value is reported with the
/// same message as an out-of-range one. When `limit` is repeated, the first
/// occurrence wins.
#[derive(Debug, Default)]
pub struct ChatQuery {
    /// Maximum number of messages to return (1-100, default 20).
    pub limit: Option<String>,
}

impl ChatQuery {
    /// The requested limit, or `None` when absent or empty.
    ///
    /// Range checking is left to the service.
    pub fn limit(&self) -> Result<Option<i64>, ValidationError> {
        match self.limit.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ValidationError::InvalidLimit),
        }
    }

    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let limit = pairs
            .into_iter()
            .find(|(key, _)| key == "limit")
            .map(|(_, value)| value);
        Self { limit }
    }
}

impl<S> FromRequestParts<S> for ChatQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(reason = %rejection.body_text(), "rejected query string");
                AppError::from(ValidationError::InvalidLimit)
            })?;
        Ok(Self::from_pairs(pairs))
    }
}
