//! Response Types
//!
//! Records as the backend returns them. Nothing here is validated or
//! normalised; views render what the server sent.

use serde::Deserialize;

/// A product listed by a store
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub store_id: Option<u64>,
}

/// A price offer made on a product
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Offer {
    pub id: u64,
    pub product_id: u64,
    pub price: f64,
    #[serde(default)]
    pub status: String,
    /// RFC 3339 timestamp
    pub expires_at: String,
    #[serde(default)]
    pub store_id: Option<u64>,
    #[serde(default)]
    pub user_id: Option<u64>,
}

/// Backend liveness report
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// Server clock, in seconds since the Unix epoch. May be fractional.
    pub time: f64,
}
