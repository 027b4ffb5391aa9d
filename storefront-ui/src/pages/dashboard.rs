//! Dashboard Page
//!
//! Landing page linking the browsable sections.

use leptos::*;
use leptos_router::*;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div>
            <h1>"Dashboard"</h1>
            <nav>
                <ul>
                    <li><A href="/products">"Products"</A></li>
                    <li><A href="/offers">"Offers"</A></li>
                    <li><A href="/health">"Health Status"</A></li>
                </ul>
            </nav>
        </div>
    }
}
