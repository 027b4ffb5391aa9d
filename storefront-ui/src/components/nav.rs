//! Navigation Component
//!
//! Header bar linking the top-level pages.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <NavLink href="/" label="Dashboard" />
            <NavLink href="/login" label="Login" />
            <NavLink href="/health" label="Health Status" />
            <NavLink href="/products" label="Products" />
            <NavLink href="/offers" label="Offers" />
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A href=href class="nav-link" active_class="active" exact=true>
            {label}
        </A>
    }
}
