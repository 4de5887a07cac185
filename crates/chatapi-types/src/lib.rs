//! Shared domain types for chatapi.
//!
//! This crate contains the domain types used across the service: Chat,
//! Message, request bodies, server configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
