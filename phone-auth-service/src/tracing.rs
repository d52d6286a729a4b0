//! Request-span helpers for the HTTP trace layer.

use axum::{body::Body, http::Request, response::Response};
use tracing::Span;
use uuid::Uuid;

/// Open a span carrying a fresh request id, the method and the path.
///
/// Query strings are left out of the span: they should never carry
/// credentials on these endpoints, but there is no reason to record them.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        tracing::Level::INFO,
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(tracing::Level::INFO, "started processing request");
}

pub fn on_response(response: &Response, latency: std::time::Duration, _span: &Span) {
    tracing::event!(
        tracing::Level::INFO,
        latency = ?latency,
        status = %response.status(),
        "finished processing request"
    );
}
