//! Request ID middleware for log correlation.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the request ID, inbound and outbound.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Request ID stored in request extensions for handlers that want it.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Reads the caller-supplied request ID, if there is a usable one.
fn incoming_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Tags each request with an ID and wraps the rest of the stack in a span
/// carrying it.
///
/// A caller-supplied `X-Request-ID` is honored so IDs stay stable across
/// hops; otherwise a fresh UUID v4 is minted. The ID is echoed in the
/// response headers and every log line emitted downstream inherits it
/// through the span.
pub async fn request_id(mut req: Request<Body>, next: Next) -> Response {
    let id = incoming_id(req.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());
    req.extensions_mut().insert(RequestId(id.clone()));

    let span = tracing::info_span!(
        "request",
        request_id = %id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let started = Instant::now();
    // The span must ride the future, not a guard held across the await.
    let mut response = next.run(req).instrument(span).await;

    tracing::info!(
        request_id = %id,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request served"
    );

    if let Ok(value) = HeaderValue::from_str(&id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_id_honors_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_static("upstream-id-42"),
        );
        assert_eq!(incoming_id(&headers).as_deref(), Some("upstream-id-42"));
    }

    #[test]
    fn test_incoming_id_absent() {
        assert_eq!(incoming_id(&HeaderMap::new()), None);
    }

    #[test]
    fn test_incoming_id_rejects_empty_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(""));
        assert_eq!(incoming_id(&headers), None);
    }

    #[test]
    fn test_incoming_id_rejects_non_utf8_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap(),
        );
        assert_eq!(incoming_id(&headers), None);
    }

    #[test]
    fn test_request_id_extension_value() {
        let id = RequestId("abc-123".to_string());
        assert_eq!(id.clone().0, "abc-123");
    }
}
