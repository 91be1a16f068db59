//! # secret-santa
//!
//! Leptos + WASM client for organizing Secret Santa gift exchanges against a
//! REST backend: sign-up/login, gift preferences, creating and joining games
//! by code, and lobby administration.
//!
//! The session lifecycle (`state::session`) and route gating (`util::auth`)
//! are the stateful core; pages are thin views over the flows in `state`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("logger already initialized");
    }
    leptos::mount::mount_to_body(app::App);
}
