//! Chat service orchestrating validation and persistence.
//!
//! Every use case validates its input first, so malformed requests never
//! reach the repository. Storage-level "not found" signals are translated
//! into `ChatError::NotFound` here, keeping callers independent of the
//! repository's error type.

use chatapi_types::chat::{Chat, ChatWithMessages, Message, NewChat, NewMessage};
use chatapi_types::error::{ChatError, RepositoryError};
use tracing::{debug, info};

use crate::chat::repository::ChatRepository;
use crate::chat::validation::{resolve_limit, validate_text, validate_title};

/// Orchestrates the chat and message use cases.
///
/// Generic over `ChatRepository` to maintain clean architecture
/// (chatapi-core never depends on chatapi-infra).
pub struct ChatService<R: ChatRepository> {
    repo: R,
}

impl<R: ChatRepository> ChatService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Access the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Create a chat from a raw, untrimmed title.
    pub async fn create_chat(&self, title: &str) -> Result<Chat, ChatError> {
        let title = validate_title(title)?;

        let chat = self
            .repo
            .create_chat(&NewChat { title })
            .await
            .map_err(storage_error)?;

        info!(chat_id = chat.id, "Chat created");
        Ok(chat)
    }

    /// Post a message to an existing chat.
    ///
    /// The text is validated before the chat lookup, and nothing is
    /// inserted when the chat does not exist.
    pub async fn create_message(&self, chat_id: i64, text: &str) -> Result<Message, ChatError> {
        let text = validate_text(text)?;

        self.require_chat(chat_id).await?;

        let message = self
            .repo
            .create_message(&NewMessage { chat_id, text })
            .await
            .map_err(storage_error)?;

        info!(chat_id, message_id = message.id, "Message created");
        Ok(message)
    }

    /// Fetch a chat with its most recent messages, oldest first.
    ///
    /// `limit` defaults to 20 and must lie in 1..=100.
    pub async fn get_chat_with_messages(
        &self,
        chat_id: i64,
        limit: Option<i64>,
    ) -> Result<ChatWithMessages, ChatError> {
        let limit = resolve_limit(limit)?;

        let chat = self.require_chat(chat_id).await?;

        let messages = self
            .repo
            .get_recent_messages(chat_id, limit)
            .await
            .map_err(storage_error)?;

        debug!(chat_id, limit, count = messages.len(), "Chat loaded");
        Ok(ChatWithMessages { chat, messages })
    }

    /// Delete a chat together with all of its messages.
    pub async fn delete_chat(&self, chat_id: i64) -> Result<(), ChatError> {
        self.repo
            .delete_chat(chat_id)
            .await
            .map_err(storage_error)?;

        info!(chat_id, "Chat deleted");
        Ok(())
    }

    async fn require_chat(&self, chat_id: i64) -> Result<Chat, ChatError> {
        self.repo
            .get_chat(chat_id)
            .await
            .map_err(storage_error)?
            .ok_or(ChatError::NotFound)
    }
}

fn storage_error(e: RepositoryError) -> ChatError {
    match e {
        RepositoryError::NotFound => ChatError::NotFound,
        other => ChatError::Storage(other.to_string()),
    }
}
