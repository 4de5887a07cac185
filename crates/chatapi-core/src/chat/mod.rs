//! Chat and message management.
//!
//! - `validation`: pure bounds checks for titles, texts, and page limits
//! - `repository`: the `ChatRepository` trait the infrastructure layer implements
//! - `service`: `ChatService`, composing both per use case

pub mod repository;
pub mod service;
pub mod validation;
