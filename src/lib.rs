//! # portfolio
//!
//! Leptos + WASM single-page portfolio site.
//!
//! This crate contains the page components, the small pieces of UI state the
//! site actually has (theme, menu, scroll choreography), and the browser
//! wiring for reveal observers, the sticky/active-nav scroll listener, the
//! typewriter effect, and the `particles` background engine. Everything that
//! touches the DOM is gated behind the `hydrate` feature so the state logic
//! tests natively.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod util;

/// WASM entry point: set up panic reporting and logging, then mount the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
