//! Application State
//!
//! Shared state accessible by all handlers.

use reqwest::redirect::Policy;
use std::path::PathBuf;

use crate::config::Config;
use crate::server::error::{ServerError, ServerResult};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Client used to forward requests to the backend
    pub client: reqwest::Client,
    /// Backend base URL, e.g. `http://localhost:8080`
    pub backend_url: String,
    /// Directory the client bundle is served from
    pub static_dir: PathBuf,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// The forwarding client has no timeout and does not follow redirects;
    /// the browser sees exactly what the backend answered.
    pub fn new(config: &Config) -> ServerResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| ServerError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            backend_url: config.backend.base_url(),
            static_dir: config.server.static_dir.clone(),
        })
    }
}
