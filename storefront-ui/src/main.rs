//! Storefront Client
//!
//! Browser entry point.

use leptos::*;

use storefront_ui::api::ApiHandle;
use storefront_ui::routes::ROUTES;
use storefront_ui::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    log::info!("Storefront client v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(|| view! { <App routes=ROUTES client=ApiHandle::http() /> });
}
