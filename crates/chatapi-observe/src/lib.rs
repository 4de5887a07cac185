//! Observability for chatapi: tracing subscriber setup and the attribute
//! names used on HTTP request spans.

pub mod http_attrs;
pub mod tracing_setup;
