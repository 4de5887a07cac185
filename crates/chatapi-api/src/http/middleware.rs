//! Request logging and request-id propagation.
//!
//! Every request gets an `x-request-id` (the caller's, or a fresh UUID v7)
//! that is echoed on the response and attached to a per-request span.
//! When the response is produced, its status and latency are recorded on
//! the span and logged at INFO.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

use chatapi_observe::http_attrs::{HTTP_RESPONSE_STATUS_CODE, HTTP_SERVER_DURATION_MS};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates time-sortable request ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let value = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(value))
    }
}

/// Open the span a request is handled in.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        http.request.method = %request.method(),
        url.path = %request.uri().path(),
        http.request.id = %request_id,
        http.response.status_code = tracing::field::Empty,
        http.server.duration_ms = tracing::field::Empty,
    )
}

/// Record the outcome of a request on its span.
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let status = response.status().as_u16();
    let latency_ms = latency.as_millis() as u64;

    span.record(HTTP_RESPONSE_STATUS_CODE, status);
    span.record(HTTP_SERVER_DURATION_MS, latency_ms);

    tracing::info!(status, latency_ms, "request completed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_request_id_is_uuid_v7() {
        let request = Request::builder().uri("/chats").body(Body::empty()).unwrap();
        let id = MakeRequestUuidV7.make_request_id(&request).unwrap();

        let parsed = Uuid::parse_str(id.header_value().to_str().unwrap()).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn test_request_ids_are_unique() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let mut make = MakeRequestUuidV7;
        let a = make.make_request_id(&request).unwrap();
        let b = make.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());
    }
}
