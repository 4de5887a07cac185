//! ChatRepository trait definition.
//!
//! Provides create/read/delete operations for chats and their messages.
//! There are no update operations: both entities are immutable once stored.

use chatapi_types::chat::{Chat, Message, NewChat, NewMessage};
use chatapi_types::error::RepositoryError;

/// Repository trait for chat and message persistence.
///
/// Implementations live in chatapi-infra (e.g., `SqliteChatRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// Insert a chat. The store assigns `id` and `created_at`.
    fn create_chat(
        &self,
        chat: &NewChat,
    ) -> impl std::future::Future<Output = Result<Chat, RepositoryError>> + Send;

    /// Get a chat by its ID. `None` when no such chat exists.
    fn get_chat(
        &self,
        chat_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Chat>, RepositoryError>> + Send;

    /// Delete a chat and, by cascade, all of its messages.
    ///
    /// Returns `RepositoryError::NotFound` when no row was deleted.
    fn delete_chat(
        &self,
        chat_id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Insert a message. The store assigns `id` and `created_at`.
    fn create_message(
        &self,
        message: &NewMessage,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// Get the `limit` most recent messages of a chat, in ascending
    /// chronological order.
    ///
    /// An unknown chat yields an empty list.
    fn get_recent_messages(
        &self,
        chat_id: i64,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}
