//! Login Page

use leptos::*;

/// Placeholder for the sign-in flow. Makes no requests.
#[component]
pub fn Login() -> impl IntoView {
    view! {
        <div>
            <h1>"Login"</h1>
            <p>"Signing in is not available yet."</p>
        </div>
    }
}
