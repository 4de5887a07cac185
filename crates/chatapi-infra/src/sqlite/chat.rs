//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `chatapi-core` using sqlx with split
//! read/write pools: raw queries, private Row structs, writes on the
//! single writer connection and reads on the reader pool.

use chatapi_core::chat::repository::ChatRepository;
use chatapi_types::chat::{Chat, Message, NewChat, NewMessage};
use chatapi_types::error::RepositoryError;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct ChatRow {
    id: i64,
    title: String,
    created_at: String,
}

impl ChatRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_chat(self) -> Result<Chat, RepositoryError> {
        Ok(Chat {
            id: self.id,
            title: self.title,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

struct MessageRow {
    id: i64,
    chat_id: i64,
    text: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            chat_id: row.try_get("chat_id")?,
            text: row.try_get("text")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        Ok(Message {
            id: self.id,
            chat_id: self.chat_id,
            text: self.text,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current time at the precision the store keeps, so the value handed
/// back from an insert equals the one read back later.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

/// Fixed-width microsecond RFC 3339, so text order is time order.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

// ---------------------------------------------------------------------------
// ChatRepository implementation
// ---------------------------------------------------------------------------

impl ChatRepository for SqliteChatRepository {
    async fn create_chat(&self, chat: &NewChat) -> Result<Chat, RepositoryError> {
        let created_at = now();

        let result = sqlx::query("INSERT INTO chats (title, created_at) VALUES (?, ?)")
            .bind(&chat.title)
            .bind(format_datetime(&created_at))
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(Chat {
            id: result.last_insert_rowid(),
            title: chat.title.clone(),
            created_at,
        })
    }

    async fn get_chat(&self, chat_id: i64) -> Result<Option<Chat>, RepositoryError> {
        let row = sqlx::query("SELECT id, title, created_at FROM chats WHERE id = ?")
            .bind(chat_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let chat_row =
                    ChatRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(chat_row.into_chat()?))
            }
            None => Ok(None),
        }
    }

    async fn delete_chat(&self, chat_id: i64) -> Result<(), RepositoryError> {
        // messages go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM chats WHERE id = ?")
            .bind(chat_id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn create_message(&self, message: &NewMessage) -> Result<Message, RepositoryError> {
        let created_at = now();

        let result =
            sqlx::query("INSERT INTO messages (chat_id, text, created_at) VALUES (?, ?, ?)")
                .bind(message.chat_id)
                .bind(&message.text)
                .bind(format_datetime(&created_at))
                .execute(&self.pool.writer)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(Message {
            id: result.last_insert_rowid(),
            chat_id: message.chat_id,
            text: message.text.clone(),
            created_at,
        })
    }

    async fn get_recent_messages(
        &self,
        chat_id: i64,
        limit: i64,
    ) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, chat_id, text, created_at FROM messages
               WHERE chat_id = ?
               ORDER BY created_at DESC, id DESC
               LIMIT ?"#,
        )
        .bind(chat_id)
        .bind(limit)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        // Newest-first from the query; callers get chronological order
        messages.reverse();

        Ok(messages)
    }
}
