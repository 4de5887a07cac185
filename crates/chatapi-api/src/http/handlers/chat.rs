//! Chat and message HTTP handlers.
//!
//! Endpoints:
//! - POST   /chats               - Create a chat
//! - POST   /chats/{id}/messages - Post a message to a chat
//! - GET    /chats/{id}          - Get a chat with its recent messages
//! - DELETE /chats/{id}          - Delete a chat and its messages

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use chatapi_types::chat::{
    Chat, ChatWithMessages, CreateChatRequest, CreateMessageRequest, Message,
};

use crate::http::error::AppError;
use crate::http::extractors::query::ChatQuery;
use crate::http::extractors::{ChatId, JsonBody};
use crate::state::AppState;

/// POST /chats - Create a new chat.
pub async fn create_chat(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateChatRequest>,
) -> Result<(StatusCode, Json<Chat>), AppError> {
    let chat = state.chat_service.create_chat(&body.title).await?;
    Ok((StatusCode::CREATED, Json(chat)))
}

/// POST /chats/{id}/messages - Post a message to an existing chat.
pub async fn create_message(
    State(state): State<AppState>,
    ChatId(chat_id): ChatId,
    JsonBody(body): JsonBody<CreateMessageRequest>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let message = state.chat_service.create_message(chat_id, &body.text).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /chats/{id}?limit=N - Get a chat with up to N recent messages.
pub async fn get_chat(
    State(state): State<AppState>,
    ChatId(chat_id): ChatId,
    query: ChatQuery,
) -> Result<Json<ChatWithMessages>, AppError> {
    let limit = query.limit()?;
    let chat = state
        .chat_service
        .get_chat_with_messages(chat_id, limit)
        .await?;
    Ok(Json(chat))
}

/// DELETE /chats/{id} - Delete a chat and, by cascade, its messages.
pub async fn delete_chat(
    State(state): State<AppState>,
    ChatId(chat_id): ChatId,
) -> Result<StatusCode, AppError> {
    state.chat_service.delete_chat(chat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
