//! # client
//!
//! Leptos + WASM admin frontend for airline sighting records.
//!
//! This crate contains pages, components, application state, and the REST
//! helpers that talk to the external sightings API. The `sightings` host
//! binary renders it on the server (`ssr`); the browser hydrates it
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod paths;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
