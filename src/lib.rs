//! # Storefront
//!
//! Development host for the storefront client. Serves the compiled
//! `storefront-ui` bundle and forwards every `/api/*` request to the
//! commerce backend so the browser only ever talks to one origin.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`server`]: Axum router, API forwarding and static file serving
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storefront::{serve, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default()?;
//!     serve(AppState::new(&config)?, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod server;

pub use config::{
    BackendConfig, Config, ConfigError, LogFormat, LoggingConfig, ServerConfig,
};

pub use server::{build_router, serve, AppState, ServerError, ServerResult};
