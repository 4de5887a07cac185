//! Infrastructure layer for chatapi.
//!
//! Contains the SQLite implementation of the `ChatRepository` trait defined
//! in `chatapi-core`, the database pool, and the config file loader.

pub mod config;
pub mod sqlite;
