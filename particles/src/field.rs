//! Particle and point types, plus spawning.
//!
//! Randomness never comes from inside this crate: spawn functions take a
//! caller-supplied source yielding values in `[0, 1)`, so the core stays
//! deterministic under test while the browser layer plugs in
//! `js_sys::Math::random`.

use std::f64::consts::TAU;

use crate::config::ParticleConfig;

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// A point in canvas space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One particle of the background field.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in CSS pixels.
    pub pos: Point,
    /// Velocity in CSS pixels per second.
    pub vel: Point,
    /// Current opacity, oscillating between the configured floor and peak.
    pub opacity: f64,
    /// Direction of the opacity oscillation.
    pub opacity_rising: bool,
}

impl Particle {
    /// Spawn a particle at a uniform random position inside the bounds,
    /// drifting in a uniform random direction at the configured speed.
    pub fn spawn(
        config: &ParticleConfig,
        width: f64,
        height: f64,
        rand: &mut dyn FnMut() -> f64,
    ) -> Self {
        let pos = Point::new(rand() * width, rand() * height);
        Self::spawn_at(config, pos, rand)
    }

    /// Spawn a particle at a fixed position with a random heading.
    pub fn spawn_at(config: &ParticleConfig, pos: Point, rand: &mut dyn FnMut() -> f64) -> Self {
        let angle = rand() * TAU;
        let speed = config.speed_px_per_s();
        Self {
            pos,
            vel: Point::new(angle.cos() * speed, angle.sin() * speed),
            opacity: config.opacity,
            opacity_rising: rand() < 0.5,
        }
    }
}
