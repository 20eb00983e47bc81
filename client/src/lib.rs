//! # client
//!
//! Leptos + WASM frontend for the concept-a-day app.
//!
//! This crate contains pages, components, application state, the typed
//! backend client and the persisted session. The host binary renders it on
//! the server; the `hydrate` entry point below takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A logger may already be installed when the module is re-initialized.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
