//! Decorative particle background engine for the portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the background canvas: seeding a particle field sized to
//! the viewport, integrating motion with bounce at the bounds, animating
//! per-particle opacity, reacting to pointer hover (repulsion) and clicks
//! (spawning), and drawing dots plus proximity links every frame. The host
//! Leptos layer is responsible only for wiring DOM events to the engine and
//! handing it a fresh [`config::ParticleConfig`] whenever the theme changes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and browser-free [`engine::EngineCore`] |
//! | [`field`] | Particle and point types, spawning |
//! | [`config`] | Declarative configuration value derived from the theme |
//! | [`render`] | Frame rendering to the 2D context |
//! | [`consts`] | Shared numeric constants (defaults, unit scales) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod field;
pub mod render;
