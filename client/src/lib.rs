//! # client
//!
//! Leptos + WASM frontend for the portfolio site and its embedded AppFeed
//! prototype. Renders the static catalog as a filterable feed with modal
//! overlays, an immersive full-screen navigator, and hand-built interactive
//! preview widgets. The same components render on the server and hydrate in
//! the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
