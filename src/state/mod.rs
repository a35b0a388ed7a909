//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`theme`, `menu`, `scroll`, `reveal`) so the
//! browser wiring and individual components depend on small focused models.
//! Every model here is plain data with pure operations; the DOM side reads
//! and writes them through `RwSignal`s provided from the app root.

pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod theme;
