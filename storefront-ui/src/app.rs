//! App Root Component
//!
//! Router, navigation bar and the shell that dispatches the current path
//! through the route table.

use leptos::*;
use leptos_router::*;

use crate::api::ApiHandle;
use crate::components::Nav;
use crate::pages::{
    Dashboard, Health, Login, NotFound, OfferDetail, OfferList, ProductDetail, ProductList,
};
use crate::routes::{self, Page, RouteDef, RouteMatch};

/// Root application component
#[component]
pub fn App(
    /// Ordered route table the shell dispatches against
    routes: &'static [RouteDef],
    /// Client every view fetches through
    client: ApiHandle,
) -> impl IntoView {
    provide_context(client);

    view! {
        <Router>
            <div class="app">
                <Nav />
                <main class="container">
                    <Routes>
                        <Route path="/*any" view=move || view! { <Shell routes=routes /> } />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Renders whichever page the current path resolves to
#[component]
fn Shell(routes: &'static [RouteDef]) -> impl IntoView {
    let location = use_location();
    let matched = create_memo(move |_| location.pathname.with(|path| routes::resolve(routes, path)));

    move || match matched.get() {
        Some(found) => page_view(found),
        None => view! { <NotFound /> }.into_view(),
    }
}

fn page_view(found: RouteMatch) -> View {
    match (found.page, found.id) {
        (Page::Dashboard, _) => view! { <Dashboard /> }.into_view(),
        (Page::Login, _) => view! { <Login /> }.into_view(),
        (Page::Health, _) => view! { <Health /> }.into_view(),
        (Page::ProductList, _) => view! { <ProductList /> }.into_view(),
        (Page::OfferList, _) => view! { <OfferList /> }.into_view(),
        (Page::ProductDetail, Some(id)) => view! { <ProductDetail id=id /> }.into_view(),
        (Page::OfferDetail, Some(id)) => view! { <OfferDetail id=id /> }.into_view(),
        // a detail pattern without a `:id` segment
        (Page::ProductDetail | Page::OfferDetail, None) => view! { <NotFound /> }.into_view(),
    }
}
