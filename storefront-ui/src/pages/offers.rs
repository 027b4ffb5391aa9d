//! Offer Pages
//!
//! Offer list and offer detail views.

use leptos::*;
use leptos_router::*;

use crate::api::{endpoints, Offer};
use crate::components::ResourceView;
use crate::format;
use crate::pages::{field_rows, EntryLink};
use crate::routes;

/// `/offers`
#[component]
pub fn OfferList() -> impl IntoView {
    view! { <ResourceView resource=endpoints::offers() render=offer_list /> }
}

/// `/offers/:id`
#[component]
pub fn OfferDetail(
    /// Route identifier, passed to the API unchanged
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! { <ResourceView resource=endpoints::offer(&id) render=offer_detail /> }
}

pub fn offer_title(offer: &Offer) -> String {
    format!("Offer for Product {}", offer.product_id)
}

pub fn offer_links(offers: &[Offer]) -> Vec<EntryLink> {
    offers
        .iter()
        .map(|o| EntryLink {
            href: routes::offer_href(o.id),
            label: offer_title(o),
            detail: o.status.clone(),
        })
        .collect()
}

pub fn offer_fields(offer: &Offer) -> Vec<(&'static str, String)> {
    vec![
        ("Price", format::price(offer.price)),
        ("Status", offer.status.clone()),
        ("Expires At", format::local_datetime_from_rfc3339(&offer.expires_at)),
    ]
}

fn offer_list(offers: Vec<Offer>) -> View {
    let links = offer_links(&offers);

    view! {
        <div>
            <h1>"Offers"</h1>
            {if links.is_empty() {
                view! { <p>"No offers."</p> }.into_view()
            } else {
                view! {
                    <ul>
                        {links.into_iter().map(|link| view! {
                            <li>
                                <A href=link.href>{link.label}</A>
                                " "
                                <span class="status">{link.detail}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </div>
    }
    .into_view()
}

fn offer_detail(offer: Offer) -> View {
    let title = offer_title(&offer);
    let rows = field_rows(offer_fields(&offer));

    view! {
        <div>
            <h1>{title}</h1>
            {rows}
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockClient;
    use crate::format::{local_datetime_from_rfc3339, DATETIME_FORMAT};
    use crate::state::loader::{fetch, load_into, MountGuard, ViewState};
    use chrono::{Local, TimeZone};
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::task::{self, LocalSet};

    fn offer() -> Offer {
        Offer {
            id: 5,
            product_id: 42,
            price: 7.25,
            status: "accepted".to_string(),
            expires_at: "2024-01-02T03:04:05Z".to_string(),
            store_id: Some(1),
            user_id: Some(2),
        }
    }

    #[test]
    fn test_links_point_at_detail_pages() {
        let links = offer_links(&[offer()]);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "/offers/5");
        assert_eq!(links[0].label, "Offer for Product 42");
    }

    #[test]
    fn test_detail_fields() {
        let expected_expiry = Local
            .timestamp_opt(1_704_164_645, 0)
            .unwrap()
            .format(DATETIME_FORMAT)
            .to_string();

        let fields = offer_fields(&offer());
        assert_eq!(fields[0], ("Price", "$7.25".to_string()));
        assert_eq!(fields[1], ("Status", "accepted".to_string()));
        assert_eq!(fields[2], ("Expires At", expected_expiry));
        assert_eq!(fields[2].1, local_datetime_from_rfc3339("2024-01-02T03:04:05Z"));
    }

    #[tokio::test]
    async fn test_detail_reads_data_field() {
        let client = MockClient::new().reply(
            "/offers/5",
            json!({ "data": {
                "id": 5,
                "product_id": 42,
                "price": 7.25,
                "status": "accepted",
                "expires_at": "2024-01-02T03:04:05Z"
            } }),
        );

        let state = fetch(&client, &endpoints::offer("5")).await;

        assert_eq!(client.requests(), vec!["/api/offers/5"]);
        assert!(matches!(state, ViewState::Loaded(o) if o.product_id == 42));
    }

    #[tokio::test]
    async fn test_detail_unmounted_before_reply() {
        let local = LocalSet::new();
        local
            .run_until(async {
                let (client, reply) = MockClient::new().deferred("/offers/5");
                let guard = MountGuard::new();
                let writes = Rc::new(Cell::new(0u32));
                let counter = Rc::clone(&writes);

                let load = task::spawn_local(load_into(
                    client,
                    endpoints::offer("5"),
                    guard.clone(),
                    move |_| counter.set(counter.get() + 1),
                ));

                task::yield_now().await;
                guard.unmount();
                reply
                    .send(Ok(json!({ "data": {
                        "id": 5,
                        "product_id": 42,
                        "price": 7.25,
                        "status": "accepted",
                        "expires_at": "2024-01-02T03:04:05Z"
                    } })))
                    .unwrap();

                assert!(!load.await.unwrap());
                assert_eq!(writes.get(), 0);
            })
            .await;
    }
}
