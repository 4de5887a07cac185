//! Application state wiring the service to its storage.
//!
//! `ChatService` is generic over its repository trait; AppState pins it to
//! the concrete SQLite implementation.

use std::sync::Arc;

use chatapi_core::chat::service::ChatService;
use chatapi_infra::sqlite::chat::SqliteChatRepository;
use chatapi_infra::sqlite::pool::DatabasePool;

pub type ConcreteChatService = ChatService<SqliteChatRepository>;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Connect to the database (running migrations) and wire the service.
    pub async fn init(database_url: &str) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(database_url).await?;
        Ok(Self::from_pool(db_pool))
    }

    /// Wire the service on top of an already-open pool.
    pub fn from_pool(db_pool: DatabasePool) -> Self {
        let chat_repo = SqliteChatRepository::new(db_pool.clone());
        Self {
            chat_service: Arc::new(ChatService::new(chat_repo)),
            db_pool,
        }
    }

    /// Close both connection pools, waiting for in-flight queries.
    pub async fn close(&self) {
        self.db_pool.writer.close().await;
        self.db_pool.reader.close().await;
    }
}
