//! API Endpoints
//!
//! One constructor per backend read. Each endpoint fixes its own unwrap
//! convention because the backend mixes bare and `data`-wrapped bodies.

use crate::state::loader::{Resource, Unwrap};

use super::types::{HealthStatus, Offer, Product};

/// `GET /api/health` - bare body
pub fn health() -> Resource<HealthStatus> {
    Resource::new("/health", Unwrap::Body)
}

/// `GET /api/products` - `{ data: [...] }`
pub fn products() -> Resource<Vec<Product>> {
    Resource::new("/products", Unwrap::Data)
}

/// `GET /api/products/{id}` - bare body
pub fn product(id: &str) -> Resource<Product> {
    Resource::new(format!("/products/{}", id), Unwrap::Body)
}

/// `GET /api/offers` - `{ data: [...] }`
pub fn offers() -> Resource<Vec<Offer>> {
    Resource::new("/offers", Unwrap::Data)
}

/// `GET /api/offers/{id}` - `{ data: {...} }`
pub fn offer(id: &str) -> Resource<Offer> {
    Resource::new(format!("/offers/{}", id), Unwrap::Data)
}
