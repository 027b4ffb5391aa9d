//! Loading Component
//!
//! Placeholder and failure states shared by every entity view.

use leptos::*;

/// Placeholder shown while a request is in flight
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">"Loading..."</div>
    }
}

/// A failed request's message, and nothing else
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="error" role="alert">{message}</div>
    }
}
