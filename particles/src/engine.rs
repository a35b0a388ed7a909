use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::ParticleConfig;
use crate::field::{Particle, Point};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. Time advances only through [`EngineCore::step`]; randomness
/// only enters through caller-supplied sources.
pub struct EngineCore {
    config: ParticleConfig,
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    pointer: Option<Point>,
    repulse_t: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            pointer: None,
            repulse_t: 0.0,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    // --- Configuration and sizing ---

    /// Replace the configuration wholesale.
    ///
    /// Particle positions are kept so a theme change recolors the field
    /// without a visual jump; drift speed is rescaled to the new value.
    pub fn apply_config(&mut self, config: ParticleConfig) {
        let new_speed = config.move_speed * crate::consts::SPEED_PX_PER_UNIT;
        for p in &mut self.particles {
            let speed = p.vel.x.hypot(p.vel.y);
            if speed > f64::EPSILON {
                let scale = new_speed / speed;
                p.vel.x *= scale;
                p.vel.y *= scale;
            }
        }
        self.config = config;
    }

    /// Set the field bounds and grow or shrink the population to the
    /// density-scaled target count.
    pub fn resize(&mut self, width: f64, height: f64, rand: &mut dyn FnMut() -> f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let target = self.config.scaled_count(self.width, self.height);
        if self.particles.len() > target {
            self.particles.truncate(target);
        }
        while self.particles.len() < target {
            self.particles
                .push(Particle::spawn(&self.config, self.width, self.height, rand));
        }
    }

    // --- Pointer interactivity ---

    /// Pointer moved over the field: arm the repulsion impulse.
    pub fn hover(&mut self, point: Point) {
        self.pointer = Some(point);
        self.repulse_t = self.config.repulse.duration_s;
    }

    /// Pointer left the field.
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Click: spawn the configured number of particles at the pointer.
    pub fn push(&mut self, point: Point, rand: &mut dyn FnMut() -> f64) {
        for _ in 0..self.config.push_quantity {
            self.particles
                .push(Particle::spawn_at(&self.config, point, rand));
        }
    }

    // --- Simulation ---

    /// Advance the field by `dt` seconds: integrate drift, bounce at the
    /// bounds, oscillate opacity, and apply any active repulsion impulse.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        let opacity_rate = self.config.opacity_rate_per_s();

        for p in &mut self.particles {
            p.pos.x += p.vel.x * dt;
            p.pos.y += p.vel.y * dt;

            if p.pos.x <= 0.0 {
                p.pos.x = 0.0;
                p.vel.x = p.vel.x.abs();
            } else if p.pos.x >= self.width {
                p.pos.x = self.width;
                p.vel.x = -p.vel.x.abs();
            }
            if p.pos.y <= 0.0 {
                p.pos.y = 0.0;
                p.vel.y = p.vel.y.abs();
            } else if p.pos.y >= self.height {
                p.pos.y = self.height;
                p.vel.y = -p.vel.y.abs();
            }

            let delta = opacity_rate * dt;
            if p.opacity_rising {
                p.opacity += delta;
                if p.opacity >= self.config.opacity {
                    p.opacity = self.config.opacity;
                    p.opacity_rising = false;
                }
            } else {
                p.opacity -= delta;
                if p.opacity <= self.config.opacity_min {
                    p.opacity = self.config.opacity_min;
                    p.opacity_rising = true;
                }
            }
        }

        self.apply_repulse(dt);
    }

    /// Push particles out of the repulsion field while the impulse decays.
    fn apply_repulse(&mut self, dt: f64) {
        let Some(pointer) = self.pointer else {
            return;
        };
        if self.repulse_t <= 0.0 {
            return;
        }
        let radius = self.config.repulse.distance;
        let duration = self.config.repulse.duration_s;
        // Full-strength escape speed clears the field radius in one duration.
        let escape_speed = if duration > 0.0 { radius / duration } else { 0.0 };
        let strength = if duration > 0.0 { self.repulse_t / duration } else { 0.0 };

        for p in &mut self.particles {
            let d = p.pos.distance_to(pointer);
            if d >= radius || d < f64::EPSILON {
                continue;
            }
            let falloff = 1.0 - d / radius;
            let shift = escape_speed * strength * falloff * dt;
            let nx = (p.pos.x - pointer.x) / d;
            let ny = (p.pos.y - pointer.y) / d;
            p.pos.x = (p.pos.x + nx * shift).clamp(0.0, self.width);
            p.pos.y = (p.pos.y + ny * shift).clamp(0.0, self.height);
        }

        self.repulse_t = (self.repulse_t - dt).max(0.0);
    }
}

/// The full background engine. Wraps [`EngineCore`] and owns the browser
/// canvas element and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
    dpr: f64,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D rendering context is unavailable.
    pub fn new(canvas: HtmlCanvasElement, config: ParticleConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            core: EngineCore::new(config),
            dpr: 1.0,
        })
    }

    /// Resize the backing store to `width` x `height` CSS pixels at the
    /// given device pixel ratio and reseed the field to match.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64, rand: &mut dyn FnMut() -> f64) {
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width((width.max(0.0) * self.dpr) as u32);
        self.canvas.set_height((height.max(0.0) * self.dpr) as u32);
        self.core.resize(width, height, rand);
    }

    // --- Delegated inputs ---

    pub fn apply_config(&mut self, config: ParticleConfig) {
        self.core.apply_config(config);
    }

    pub fn hover(&mut self, point: Point) {
        self.core.hover(point);
    }

    pub fn pointer_left(&mut self) {
        self.core.pointer_left();
    }

    pub fn push(&mut self, point: Point, rand: &mut dyn FnMut() -> f64) {
        self.core.push(point, rand);
    }

    /// Advance the simulation by `dt` seconds and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, dt: f64) -> Result<(), JsValue> {
        self.core.step(dt);
        render::draw(&self.ctx, &self.core, self.dpr)
    }
}

/// Random source backed by `Math.random`, for browser callers.
#[must_use]
pub fn js_random() -> f64 {
    js_sys::Math::random()
}
