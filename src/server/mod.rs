//! Development Host
//!
//! Serves the storefront client and forwards its API calls, built with Axum.
//!
//! # Routes
//!
//! - `/api`, `/api/*` - forwarded to the configured backend, any method
//! - anything else - a file from the static directory, falling back to
//!   `index.html` so client-side routes such as `/products/42` load the app
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront::config::Config;
//! use storefront::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::new(&config)?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod proxy;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::any, Router};
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let index = state.static_dir.join("index.html");
    let assets = ServeDir::new(&state.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api", any(proxy::forward))
        .route("/api/*rest", any(proxy::forward))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the development host
pub async fn serve(state: AppState, config: &ServerConfig) -> ServerResult<()> {
    let backend_url = state.backend_url.clone();
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Storefront listening on http://{}", addr);
    tracing::info!("Forwarding /api to {}", backend_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Storefront shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
