//! Browser wiring utilities.
//!
//! Everything here that touches the DOM is gated behind the `hydrate`
//! feature and degrades to a no-op (or a default value) off the browser.

pub mod observe;
pub mod scroll_listener;
pub mod theme_storage;
pub mod typewriter;
