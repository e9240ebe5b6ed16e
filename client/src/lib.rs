//! # client
//!
//! Leptos frontend for the OfficeHub office-space booking site.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Pages fetch from the booking REST API, validate forms before
//! submitting, and hand the latest booking confirmation between routes via
//! context.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire panics and `log` to the browser console, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
