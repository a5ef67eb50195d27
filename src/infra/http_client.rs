//! HTTP client factory with consistent timeout and header configuration.
//!
//! Outbound HTTP clients should be built through this module rather than
//! constructing `reqwest::Client` directly.

use reqwest::{
    Client, Request,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const JSON: &str = "application/json";

/// Default headers for JSON APIs. `Content-Type` is set per request, only when there is a body.
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON));
    headers
}

/// Marks a request body as JSON unless the caller already chose a content type.
pub fn ensure_json_content_type(request: &mut Request) {
    if request.body().is_some() && !request.headers().contains_key(CONTENT_TYPE) {
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
    }
}

/// Build an HTTP client with an explicit request timeout and headers sent on every request.
pub fn try_build_client_with(
    timeout: Duration,
    default_headers: HeaderMap,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .default_headers(default_headers)
        .build()
}
