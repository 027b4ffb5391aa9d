//! Product Pages
//!
//! Product list and product detail views.

use leptos::*;
use leptos_router::*;

use crate::api::{endpoints, Product};
use crate::components::ResourceView;
use crate::format;
use crate::pages::{field_rows, EntryLink};
use crate::routes;

/// `/products` - every product, each linking to its detail page
#[component]
pub fn ProductList() -> impl IntoView {
    view! { <ResourceView resource=endpoints::products() render=product_list /> }
}

/// `/products/:id`
#[component]
pub fn ProductDetail(
    /// Route identifier, passed to the API unchanged
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! { <ResourceView resource=endpoints::product(&id) render=product_detail /> }
}

/// One link per product, in response order
pub fn product_links(products: &[Product]) -> Vec<EntryLink> {
    products
        .iter()
        .map(|p| EntryLink {
            href: routes::product_href(p.id),
            label: p.name.clone(),
            detail: format::price(p.price),
        })
        .collect()
}

pub fn product_fields(product: &Product) -> Vec<(&'static str, String)> {
    vec![
        ("Price", format::price(product.price)),
        ("Category", product.category.clone()),
        ("In Stock", format::yes_no(product.in_stock).to_string()),
    ]
}

fn product_list(products: Vec<Product>) -> View {
    let links = product_links(&products);

    view! {
        <div>
            <h1>"Products"</h1>
            {if links.is_empty() {
                view! { <p>"No products."</p> }.into_view()
            } else {
                view! {
                    <ul>
                        {links.into_iter().map(|link| view! {
                            <li>
                                <A href=link.href>{link.label}</A>
                                " "
                                <span class="price">{link.detail}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </div>
    }
    .into_view()
}

fn product_detail(product: Product) -> View {
    let rows = field_rows(product_fields(&product));

    view! {
        <div>
            <h1>{product.name}</h1>
            <p>{product.description}</p>
            {rows}
        </div>
    }
    .into_view()
}
