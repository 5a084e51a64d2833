//! # client
//!
//! Leptos + WASM frontend for the OTI Connect member portal.
//!
//! Session rules live in the `session` crate. This crate binds them to the
//! browser: `localStorage` for the bearer token, `gloo-net` for the backend,
//! a context-provided `RwSignal<AuthState>` for reactive rendering, and the
//! routed pages and guard components built on top of those.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point. Hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
