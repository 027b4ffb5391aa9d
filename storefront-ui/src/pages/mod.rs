//! Pages
//!
//! Top-level page components, one per route.

pub mod dashboard;
pub mod health;
pub mod login;
pub mod not_found;
pub mod offers;
pub mod products;

pub use dashboard::Dashboard;
pub use health::Health;
pub use login::Login;
pub use not_found::NotFound;
pub use offers::{OfferDetail, OfferList};
pub use products::{ProductDetail, ProductList};

use leptos::*;

/// A list entry linking to a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLink {
    pub href: String,
    pub label: String,
    /// Secondary text shown beside the link
    pub detail: String,
}

/// `Label: value` paragraphs for a detail view
pub fn field_rows(fields: Vec<(&'static str, String)>) -> View {
    fields
        .into_iter()
        .map(|(label, value)| view! { <p>{label}": "{value}</p> })
        .collect_view()
}
