//! # client
//!
//! Leptos + WASM frontend for the Ultramed clinic console.
//!
//! The crate holds the root component with its session gate, the login and
//! dashboard pages, their presentational components, and the user record
//! type they exchange. Built with `ssr` it is rendered by the `server`
//! crate; built with `hydrate` it attaches to that markup in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::logging::init();
    leptos::mount::hydrate_body(app::App);
}
