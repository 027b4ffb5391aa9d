//! Health Status Page
//!
//! Shows the backend's liveness report.

use leptos::*;

use crate::api::{endpoints, HealthStatus};
use crate::components::ResourceView;
use crate::format;
use crate::pages::field_rows;

/// `/health`
#[component]
pub fn Health() -> impl IntoView {
    view! { <ResourceView resource=endpoints::health() render=health_status /> }
}

/// Server clock as local date/time. The backend reports seconds.
pub fn server_time(health: &HealthStatus) -> String {
    format::local_datetime_from_seconds(health.time)
}

fn health_status(health: HealthStatus) -> View {
    let rows = field_rows(vec![
        ("Status", health.status.clone()),
        ("Time", server_time(&health)),
    ]);

    view! {
        <div>
            <h1>"Health Status"</h1>
            {rows}
        </div>
    }
    .into_view()
}
