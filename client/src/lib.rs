//! # client
//!
//! Leptos + WASM frontend for the podcast marketing site: episode listings,
//! the upcoming-episode carousel, and the blog feed, all backed by the
//! `server` API gateway. The app is fully client-rendered and deployed as
//! static assets; it talks to the gateway cross-origin.
//!
//! State modules are plain data with methods so the interesting logic
//! (carousel navigation, fetch lifecycle, list partitioning) tests natively
//! without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mounts the application onto the document body.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
