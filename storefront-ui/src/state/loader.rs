//! Resource Loader
//!
//! The fetch-on-mount lifecycle shared by every entity view: issue one
//! request, hold the view in [`ViewState::Loading`], then settle into
//! [`ViewState::Loaded`] or [`ViewState::Failed`]. Results that arrive after
//! the view has unmounted are dropped.

use leptos::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::Cell;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::api::{ApiClient, ApiHandle, RequestFailed};

/// Lifecycle of one mounted view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

impl<T> From<Result<T, RequestFailed>> for ViewState<T> {
    fn from(result: Result<T, RequestFailed>) -> Self {
        match result {
            Ok(value) => ViewState::Loaded(value),
            Err(e) => ViewState::Failed(e.message),
        }
    }
}

/// Where the payload sits in a response body.
///
/// The backend is not consistent about this, so each endpoint states its own
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unwrap {
    /// The body is the payload
    Body,
    /// The payload is the body's `data` field
    Data,
}

impl Unwrap {
    fn apply(self, body: Value) -> Result<Value, RequestFailed> {
        match self {
            Unwrap::Body => Ok(body),
            Unwrap::Data => match body {
                Value::Object(mut fields) => fields
                    .remove("data")
                    .ok_or_else(|| RequestFailed::new("Response has no data field")),
                _ => Err(RequestFailed::new("Response has no data field")),
            },
        }
    }
}

/// One remote read: which path to GET and how to pull `T` out of the body
#[derive(Debug, Clone)]
pub struct Resource<T> {
    path: String,
    unwrap: Unwrap,
    _payload: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Resource<T> {
    pub fn new(path: impl Into<String>, unwrap: Unwrap) -> Self {
        Self {
            path: path.into(),
            unwrap,
            _payload: PhantomData,
        }
    }

    /// Path relative to the API prefix
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn unwrap_rule(&self) -> Unwrap {
        self.unwrap
    }

    /// Extract and deserialize the payload from a response body
    pub fn decode(&self, body: Value) -> Result<T, RequestFailed> {
        let payload = self.unwrap.apply(body)?;
        serde_json::from_value(payload).map_err(|e| RequestFailed::new(format!("Parse error: {}", e)))
    }
}

/// Liveness flag for one mount. Cleared when the view unmounts.
#[derive(Debug, Clone)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn unmount(&self) {
        self.0.set(false);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform the request for `resource` and settle it into a view state
pub async fn fetch<T, C>(client: &C, resource: &Resource<T>) -> ViewState<T>
where
    T: DeserializeOwned,
    C: ApiClient + ?Sized,
{
    client
        .get(resource.path())
        .await
        .and_then(|body| resource.decode(body))
        .into()
}

/// Fetch `resource` and hand the settled state to `apply`, unless the mount
/// ended while the request was in flight. Returns whether the state was
/// applied.
pub async fn load_into<T, C, F>(client: C, resource: Resource<T>, guard: MountGuard, apply: F) -> bool
where
    T: DeserializeOwned,
    C: ApiClient,
    F: FnOnce(ViewState<T>),
{
    let state = fetch(&client, &resource).await;

    if !guard.is_mounted() {
        log::debug!("discarding response for {} after unmount", resource.path());
        return false;
    }

    if let ViewState::Failed(message) = &state {
        log::debug!("request for {} failed: {}", resource.path(), message);
    }

    apply(state);
    true
}

/// Guard for the current reactive owner, cleared when the owner is disposed
/// or re-run
pub fn use_mount_guard() -> MountGuard {
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.unmount()
    });
    guard
}

/// Start loading `resource` for the current component and return its state.
///
/// Must be called while a component is being built: the request is tied to
/// the component's reactive scope and is abandoned on cleanup.
pub fn use_loader<T>(resource: Resource<T>) -> ReadSignal<ViewState<T>>
where
    T: DeserializeOwned + Clone + 'static,
{
    let client = use_context::<ApiHandle>().expect("ApiHandle not found");
    let (state, set_state) = create_signal(ViewState::Loading);
    let guard = use_mount_guard();

    spawn_local(async move {
        load_into(client, resource, guard, move |settled| set_state.set(settled)).await;
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockClient;
    use crate::api::Offer;
    use serde_json::json;
    use std::cell::RefCell;
    use tokio::task::{self, LocalSet};

    fn offer_body() -> Value {
        json!({
            "data": {
                "id": 9,
                "product_id": 3,
                "price": 19.5,
                "status": "pending",
                "expires_at": "2024-01-02T03:04:05Z"
            }
        })
    }

    #[test]
    fn test_unwrap_body_passes_through() {
        let body = json!({ "status": "ok" });
        assert_eq!(Unwrap::Body.apply(body.clone()).unwrap(), body);
    }

    #[test]
    fn test_unwrap_data_takes_nested_field() {
        let body = json!({ "data": [1, 2, 3] });
        assert_eq!(Unwrap::Data.apply(body).unwrap(), json!([1, 2, 3]));
    }

    #[test]
    fn test_unwrap_data_missing_field_fails() {
        let err = Unwrap::Data.apply(json!({ "items": [] })).unwrap_err();
        assert_eq!(err.message, "Response has no data field");

        assert!(Unwrap::Data.apply(json!([1])).is_err());
    }

    #[test]
    fn test_decode_reports_shape_mismatch() {
        let resource: Resource<Offer> = Resource::new("/offers/1", Unwrap::Data);
        let err = resource.decode(json!({ "data": { "id": "nope" } })).unwrap_err();
        assert!(err.message.starts_with("Parse error"));
    }

    #[test]
    fn test_mount_guard() {
        let guard = MountGuard::new();
        let other = guard.clone();
        assert!(guard.is_mounted());

        other.unmount();
        assert!(!guard.is_mounted());
    }

    #[test]
    fn test_mount_guard_cleared_when_owner_reruns() {
        let runtime = create_runtime();
        let (epoch, set_epoch) = create_signal(0);
        let guards = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&guards);
        create_effect(move |_| {
            let _ = epoch.get();
            sink.borrow_mut().push(use_mount_guard());
        });

        assert_eq!(guards.borrow().len(), 1);
        assert!(guards.borrow()[0].is_mounted());

        set_epoch.set(1);
        assert_eq!(guards.borrow().len(), 2);
        assert!(!guards.borrow()[0].is_mounted());
        assert!(guards.borrow()[1].is_mounted());

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_fetch_resolves_to_loaded() {
        let client = MockClient::new().reply("/offers/9", offer_body());
        let resource: Resource<Offer> = Resource::new("/offers/9", Unwrap::Data);

        match fetch(&client, &resource).await {
            ViewState::Loaded(offer) => {
                assert_eq!(offer.id, 9);
                assert_eq!(offer.product_id, 3);
            }
            other => panic!("unexpected state: {:?}", other),
        }
        assert_eq!(client.requests(), vec!["/api/offers/9"]);
    }

    #[tokio::test]
    async fn test_fetch_rejection_keeps_message() {
        let client = MockClient::new().reject("/offers/9", "Network Error");
        let resource: Resource<Offer> = Resource::new("/offers/9", Unwrap::Data);

        assert_eq!(
            fetch(&client, &resource).await,
            ViewState::Failed("Network Error".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_into_stays_loading_until_reply() {
        let local = LocalSet::new();
        local
            .run_until(async {
                let (client, reply) = MockClient::new().deferred("/offers/9");
                let state = Rc::new(RefCell::new(ViewState::<Offer>::Loading));
                let sink = Rc::clone(&state);

                let load = task::spawn_local(load_into(
                    client,
                    Resource::new("/offers/9", Unwrap::Data),
                    MountGuard::new(),
                    move |settled| *sink.borrow_mut() = settled,
                ));

                task::yield_now().await;
                assert!(state.borrow().is_loading());

                reply.send(Ok(offer_body())).unwrap();
                assert!(load.await.unwrap());
                assert!(matches!(&*state.borrow(), ViewState::Loaded(o) if o.id == 9));
            })
            .await;
    }

    #[tokio::test]
    async fn test_load_into_discards_after_unmount() {
        let local = LocalSet::new();
        local
            .run_until(async {
                let (client, reply) = MockClient::new().deferred("/offers/9");
                let guard = MountGuard::new();
                let writes = Rc::new(Cell::new(0));
                let counter = Rc::clone(&writes);

                let load = task::spawn_local(load_into(
                    client,
                    Resource::<Offer>::new("/offers/9", Unwrap::Data),
                    guard.clone(),
                    move |_| counter.set(counter.get() + 1),
                ));

                task::yield_now().await;
                guard.unmount();

                reply.send(Ok(offer_body())).unwrap();
                assert!(!load.await.unwrap());
                assert_eq!(writes.get(), 0);
            })
            .await;
    }
}
