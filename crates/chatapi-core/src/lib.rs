//! Business logic and repository trait definitions for chatapi.
//!
//! This crate defines the "port" (repository trait) that the infrastructure
//! layer implements, plus input validation and the service that composes
//! them. It depends only on `chatapi-types` -- never on `chatapi-infra` or
//! any database/IO crate.

pub mod chat;
