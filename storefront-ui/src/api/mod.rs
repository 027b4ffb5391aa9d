//! Storefront API
//!
//! Client, endpoint definitions and response types for the backend REST API.

pub mod client;
pub mod endpoints;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{
    url, ApiClient, ApiFuture, ApiHandle, ApiResult, HttpClient, RequestFailed, API_PREFIX,
};
pub use types::{HealthStatus, Offer, Product};
