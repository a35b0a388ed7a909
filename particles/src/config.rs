//! Declarative engine configuration.
//!
//! A [`ParticleConfig`] is a plain value computed wholesale by the host
//! (color comes from the active theme) and handed to the engine on every
//! theme change. The engine never mutates it in place.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_COUNT, DEFAULT_DENSITY_AREA, DEFAULT_LINK_DISTANCE, DEFAULT_LINK_OPACITY,
    DEFAULT_LINK_WIDTH, DEFAULT_MOVE_SPEED, DEFAULT_OPACITY, DEFAULT_OPACITY_ANIM_SPEED,
    DEFAULT_OPACITY_MIN, DEFAULT_PUSH_QUANTITY, DEFAULT_REPULSE_DISTANCE,
    DEFAULT_REPULSE_DURATION_S, DEFAULT_SIZE,
};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Full configuration for the particle layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Particle count per reference density square.
    pub count: u32,
    /// Side length of the reference density square in CSS pixels.
    pub density_area: f64,
    /// Particle and link color as a CSS color string.
    pub color: String,
    /// Peak particle opacity.
    pub opacity: f64,
    /// Floor of the opacity oscillation.
    pub opacity_min: f64,
    /// Opacity animation speed multiplier.
    pub opacity_anim_speed: f64,
    /// Particle radius in CSS pixels.
    pub size: f64,
    /// Proximity link settings.
    pub link: LinkConfig,
    /// Motion speed multiplier.
    pub move_speed: f64,
    /// Hover repulsion settings.
    pub repulse: RepulseConfig,
    /// Particles spawned per click.
    pub push_quantity: u32,
}

/// Settings for the lines drawn between nearby particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Maximum linking distance in CSS pixels.
    pub distance: f64,
    /// Opacity of a zero-length link; fades linearly to zero at `distance`.
    pub opacity: f64,
    /// Stroke width in CSS pixels.
    pub width: f64,
}

/// Settings for pointer-hover repulsion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepulseConfig {
    /// Radius of the repulsion field in CSS pixels.
    pub distance: f64,
    /// Seconds over which an impulse decays to zero.
    pub duration_s: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            density_area: DEFAULT_DENSITY_AREA,
            color: "#ffffff".to_owned(),
            opacity: DEFAULT_OPACITY,
            opacity_min: DEFAULT_OPACITY_MIN,
            opacity_anim_speed: DEFAULT_OPACITY_ANIM_SPEED,
            size: DEFAULT_SIZE,
            link: LinkConfig {
                distance: DEFAULT_LINK_DISTANCE,
                opacity: DEFAULT_LINK_OPACITY,
                width: DEFAULT_LINK_WIDTH,
            },
            move_speed: DEFAULT_MOVE_SPEED,
            repulse: RepulseConfig {
                distance: DEFAULT_REPULSE_DISTANCE,
                duration_s: DEFAULT_REPULSE_DURATION_S,
            },
            push_quantity: DEFAULT_PUSH_QUANTITY,
        }
    }
}

impl ParticleConfig {
    /// Default configuration recolored for the given CSS color.
    #[must_use]
    pub fn with_color(color: &str) -> Self {
        Self {
            color: color.to_owned(),
            ..Self::default()
        }
    }

    /// Drift speed in CSS pixels per second.
    #[must_use]
    pub fn speed_px_per_s(&self) -> f64 {
        self.move_speed * crate::consts::SPEED_PX_PER_UNIT
    }

    /// Opacity change rate in units per second.
    #[must_use]
    pub fn opacity_rate_per_s(&self) -> f64 {
        self.opacity_anim_speed * crate::consts::OPACITY_UNITS_PER_SPEED
    }

    /// Particle count for a viewport of the given size, scaled by density.
    ///
    /// `count` particles fill one `density_area` x `density_area` square; a
    /// larger viewport gets proportionally more.
    #[must_use]
    pub fn scaled_count(&self, width: f64, height: f64) -> usize {
        if width <= 0.0 || height <= 0.0 || self.density_area <= 0.0 {
            return 0;
        }
        let scale = (width * height) / (self.density_area * self.density_area);
        let scaled = (f64::from(self.count) * scale).round();
        if scaled < 1.0 { 1 } else { scaled as usize }
    }
}
