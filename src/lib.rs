//! # clinic-client
//!
//! Leptos + WASM frontend session layer for the clinic portal.
//!
//! This crate holds the client-side authentication state: the current user,
//! login and logout against the backend's `/auth` endpoints, and a loading
//! flag, persisted in `localStorage` and provided to the UI tree through a
//! single `SessionStore` context.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
