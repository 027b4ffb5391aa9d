//! Resource View Component
//!
//! Binds one [`Resource`] to the tri-state render policy: placeholder while
//! loading, the bare message on failure, `render` once loaded.

use leptos::*;
use serde::de::DeserializeOwned;

use crate::components::{ErrorMessage, Loading};
use crate::state::loader::{use_loader, Resource, ViewState};

/// Fetches `resource` on mount and renders its current state
#[component]
pub fn ResourceView<T, F>(
    /// What to fetch and how to unwrap it
    resource: Resource<T>,
    /// Markup for the loaded payload
    render: F,
) -> impl IntoView
where
    T: DeserializeOwned + Clone + 'static,
    F: Fn(T) -> View + 'static,
{
    let state = use_loader(resource);

    move || match state.get() {
        ViewState::Loading => view! { <Loading /> }.into_view(),
        ViewState::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
        ViewState::Loaded(value) => render(value),
    }
}
