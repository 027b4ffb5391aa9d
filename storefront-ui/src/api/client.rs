//! HTTP API Client
//!
//! Read-only access to the storefront REST API. Every call is a single GET
//! under the `/api` prefix: no retries, no timeout, no caching.

use gloo_net::http::Request;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Fixed prefix every API path is mounted under
pub const API_PREFIX: &str = "/api";

/// The single error surfaced to views.
///
/// Transport failures, non-2xx statuses and undecodable bodies all collapse
/// into this, carrying only a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestFailed {
    pub message: String,
}

impl RequestFailed {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error for a response that arrived with a non-success status
    pub fn status(status: u16) -> Self {
        Self::new(format!("Request failed with status code {}", status))
    }
}

pub type ApiResult<T> = Result<T, RequestFailed>;

/// Future returned by [`ApiClient::get`]
pub type ApiFuture = Pin<Box<dyn Future<Output = ApiResult<Value>>>>;

/// Build the URL for a path under the API prefix
pub fn url(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

/// Transport seam between views and the network
pub trait ApiClient {
    /// Issue one GET for `path` (relative to [`API_PREFIX`]) and resolve with
    /// the decoded JSON body.
    fn get(&self, path: &str) -> ApiFuture;
}

impl<C: ApiClient + ?Sized> ApiClient for Rc<C> {
    fn get(&self, path: &str) -> ApiFuture {
        (**self).get(path)
    }
}

/// Browser client backed by `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClient;

impl ApiClient for HttpClient {
    fn get(&self, path: &str) -> ApiFuture {
        let url = url(path);

        Box::pin(async move {
            log::debug!("GET {}", url);

            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| RequestFailed::new(e.to_string()))?;

            if !response.ok() {
                return Err(RequestFailed::status(response.status()));
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| RequestFailed::new(format!("Parse error: {}", e)))
        })
    }
}

/// Shared handle to the active client, provided through Leptos context
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn ApiClient>);

impl ApiHandle {
    pub fn new(client: impl ApiClient + 'static) -> Self {
        Self(Rc::new(client))
    }

    /// Handle backed by the browser `fetch` client
    pub fn http() -> Self {
        Self::new(HttpClient)
    }
}

impl ApiClient for ApiHandle {
    fn get(&self, path: &str) -> ApiFuture {
        self.0.get(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_prefixes_path() {
        assert_eq!(url("/health"), "/api/health");
        assert_eq!(url("/offers/7"), "/api/offers/7");
    }

    #[test]
    fn test_status_message() {
        let err = RequestFailed::status(404);
        assert_eq!(err.message, "Request failed with status code 404");
        assert_eq!(err.to_string(), err.message);
    }
}
