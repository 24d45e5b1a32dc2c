//! # quantix-client
//!
//! Leptos + WASM frontend for the Quantix landing page.
//!
//! This crate contains the sector registry, the sector grid and its click
//! dispatch, the call-to-action scroll, and the pages that compose them.
//! The `ssr` feature is used by the `quantix` server for rendering; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
