//! # client
//!
//! Leptos + WASM frontend for the portal: a Home page plus Login and Register
//! forms backed by the remote authentication API.
//!
//! This crate contains pages, components, form and toast state, the typed auth
//! API client, and browser helpers for token storage and delayed redirects.
//! The `hydrate` feature builds the browser bundle; `ssr` is enabled by the
//! host server for server-side rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
