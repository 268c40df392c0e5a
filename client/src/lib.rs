//! HorarioUCF web client.
//!
//! ARCHITECTURE
//! ============
//! `app` wires the router and shell, `components` renders the navigation bar
//! and diagnostic panel, `state` holds transient UI/auth state, and `util`
//! isolates browser and token concerns behind plain functions so they can be
//! tested without a DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
