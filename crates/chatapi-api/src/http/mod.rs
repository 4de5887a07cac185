//! HTTP/REST API layer for chatapi.
//!
//! Axum-based REST API mapping the chat use cases onto `/chats` routes,
//! with `{"error": ...}` error bodies and request tracing.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
