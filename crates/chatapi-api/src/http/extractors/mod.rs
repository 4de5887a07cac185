//! Request extractors whose rejections use the `{"error": ...}` body shape.

pub mod query;

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::http::error::AppError;

/// Chat id taken from the `{id}` path segment. Must be a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatId(pub i64);

impl<S> FromRequestParts<S> for ChatId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_chat_id())?;
        parse_chat_id(&raw).map(ChatId)
    }
}

fn invalid_chat_id() -> AppError {
    AppError::BadRequest("Invalid chat ID".to_string())
}

/// Parse a chat id from a path parameter, returning a 400 error on invalid format.
pub fn parse_chat_id(s: &str) -> Result<i64, AppError> {
    match s.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid_chat_id()),
    }
}

/// JSON request body. Any decoding failure (bad syntax, wrong types,
/// missing content type) becomes `400 {"error": "Invalid request body"}`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                Err(AppError::BadRequest("Invalid request body".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_id_accepts_positive_integers() {
        assert_eq!(parse_chat_id("1").unwrap(), 1);
        assert_eq!(parse_chat_id("9000").unwrap(), 9000);
    }

    #[test]
    fn test_parse_chat_id_rejects_garbage() {
        for raw in ["", "abc", "0", "-3", "1.0", "99999999999999999999"] {
            assert!(
                matches!(parse_chat_id(raw), Err(AppError::BadRequest(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
