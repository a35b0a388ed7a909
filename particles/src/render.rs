//! Frame rendering: draws the particle field to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only view of the
//! engine core and produces pixels; it does not mutate simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::frame`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::engine::EngineCore;

/// Draw one frame: proximity links first, then the particles on top.
///
/// The context is scaled by `dpr` so drawing happens in CSS pixels on a
/// retina-sized backing store.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore, dpr: f64) -> Result<(), JsValue> {
    let width = core.width();
    let height = core.height();
    let cfg = core.config();
    let particles = core.particles();

    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, width, height);

    // Layer 1: links, faded with distance.
    ctx.set_stroke_style_str(&cfg.color);
    ctx.set_line_width(cfg.link.width);
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let d = a.pos.distance_to(b.pos);
            if d >= cfg.link.distance {
                continue;
            }
            ctx.set_global_alpha(cfg.link.opacity * (1.0 - d / cfg.link.distance));
            ctx.begin_path();
            ctx.move_to(a.pos.x, a.pos.y);
            ctx.line_to(b.pos.x, b.pos.y);
            ctx.stroke();
        }
    }

    // Layer 2: particle dots.
    ctx.set_fill_style_str(&cfg.color);
    for p in particles {
        ctx.set_global_alpha(p.opacity);
        ctx.begin_path();
        ctx.arc(p.pos.x, p.pos.y, cfg.size, 0.0, TAU)?;
        ctx.fill();
    }

    ctx.set_global_alpha(1.0);
    Ok(())
}
