//! Storefront Client
//!
//! Single-page client for browsing products and offers, built with Leptos
//! (WASM).
//!
//! # Architecture
//!
//! - [`api`]: one-shot GET requests under `/api`, behind the [`api::ApiClient`] trait
//! - [`state::loader`]: the fetch-on-mount lifecycle every entity view shares
//! - [`pages`]: the entity views and static pages
//! - [`routes`]: the ordered route table the [`app::App`] shell dispatches on
//!
//! All traffic goes to the page's own origin; the development host (or
//! `trunk serve`) forwards `/api/*` to the backend.

pub mod api;
pub mod app;
pub mod components;
pub mod format;
pub mod pages;
pub mod routes;
pub mod state;

pub use app::App;
