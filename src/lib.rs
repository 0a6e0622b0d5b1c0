//! # mercari-web
//!
//! Leptos + WASM frontend for the simple marketplace: an item grid backed by
//! `GET /items` and a listing form that uploads a new item as multipart data.
//!
//! Component logic lives in `state` as plain Rust so it can be exercised
//! natively; `components` binds it to signals and DOM events, and `net`
//! talks to the backend. Browser-only code is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
