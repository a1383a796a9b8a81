//! # client
//!
//! Leptos + WASM frontend for the email triage page.
//!
//! The page collects pasted email text or an uploaded `.txt`/`.pdf` file,
//! sends it to the classification backend through the shared `triage` flow,
//! and renders the category, explanation, and suggested reply.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
