//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod loading;
pub mod nav;
pub mod resource_view;

pub use loading::{ErrorMessage, Loading};
pub use nav::Nav;
pub use resource_view::ResourceView;
