//! Not Found Page

use leptos::*;
use leptos_router::*;

/// Rendered for any path the route table does not match
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Go to Dashboard"</A>
        </div>
    }
}
