//! OpenTelemetry HTTP semantic convention attribute names.
//!
//! Fields known when a request arrives are declared literally in the span
//! macro; these are the ones filled in later through `Span::record`.

/// HTTP response status code.
pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";

/// Wall-clock handling time in milliseconds (non-standard).
pub const HTTP_SERVER_DURATION_MS: &str = "http.server.duration_ms";
