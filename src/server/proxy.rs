//! API Forwarding
//!
//! Relays `/api/*` to the backend: method, path, query, headers and body go
//! out unchanged, and the backend's status, headers and body come back
//! unchanged. Only hop-by-hop headers are dropped.

use axum::{
    body::{self, Body},
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName},
    response::Response,
};
use std::sync::Arc;

use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// Largest request body forwarded to the backend
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Headers that describe a single connection and must not be relayed
const HOP_BY_HOP: [HeaderName; 7] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// ANY /api/*
pub async fn forward(State(state): State<Arc<AppState>>, request: Request) -> ServerResult<Response> {
    let (parts, body) = request.into_parts();

    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = format!("{}{}", state.backend_url, path_and_query);

    let body = body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {}", e)))?;

    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    headers.remove(header::HOST);

    tracing::debug!(method = %parts.method, url = %url, "Forwarding request");

    let upstream = state
        .client
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Backend request failed");
            ServerError::BadGateway(e.to_string())
        })?;

    let status = upstream.status();
    let mut response_headers = upstream.headers().clone();
    strip_hop_by_hop(&mut response_headers);

    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ServerError::BadGateway(format!("Failed to read backend response: {}", e)))?;

    tracing::debug!(url = %url, status = %status, bytes = bytes.len(), "Backend responded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;

    Ok(response)
}

/// Remove hop-by-hop headers, including any listed in `Connection`
fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    for name in HOP_BY_HOP.iter().chain(listed.iter()) {
        headers.remove(name);
    }
    headers.remove("keep-alive");
}
