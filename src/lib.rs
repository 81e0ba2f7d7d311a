//! # retrace-client
//!
//! Leptos + WASM frontend for the Retrace campus lost-and-found service.
//! Replaces the React `frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the REST
//! client for the lost/found report endpoints, and the legacy static-page
//! enhancer (nav-link highlighting and file-input image preview).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the app into `<body>`. The nav enhancer
/// runs from the navigation bar's route-change effect.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(app::App);
}
