//! Chat and message types.
//!
//! A chat is a conversation thread container; each message belongs to
//! exactly one chat. Both are immutable once created and can only be
//! deleted (deleting a chat cascades to its messages).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A conversation thread.
///
/// `id` and `created_at` are assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A single text entry within a chat.
///
/// Messages are ordered by `created_at` within a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A validated chat waiting to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChat {
    pub title: String,
}

/// A validated message waiting to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub chat_id: i64,
    pub text: String,
}

/// A chat together with its most recent messages in chronological order.
///
/// Serializes flat: `{id, title, created_at, messages: [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatWithMessages {
    #[serde(flatten)]
    pub chat: Chat,
    pub messages: Vec<Message>,
}

/// Request body for creating a chat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateChatRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

/// Request body for posting a message to a chat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

/// Missing and `null` fields both decode to an empty string, leaving the
/// rejection to validation.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
