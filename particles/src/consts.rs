//! Shared numeric constants for the particles crate.

// ── Configuration defaults ──────────────────────────────────────

/// Particle count over one reference density area.
pub const DEFAULT_COUNT: u32 = 60;

/// Side length in CSS pixels of the reference density square.
pub const DEFAULT_DENSITY_AREA: f64 = 800.0;

/// Peak particle opacity.
pub const DEFAULT_OPACITY: f64 = 0.5;

/// Floor of the opacity oscillation.
pub const DEFAULT_OPACITY_MIN: f64 = 0.1;

/// Opacity animation speed multiplier.
pub const DEFAULT_OPACITY_ANIM_SPEED: f64 = 1.0;

/// Particle radius in CSS pixels.
pub const DEFAULT_SIZE: f64 = 2.0;

/// Maximum distance in CSS pixels at which two particles are linked.
pub const DEFAULT_LINK_DISTANCE: f64 = 150.0;

/// Peak link opacity (scaled down with distance).
pub const DEFAULT_LINK_OPACITY: f64 = 0.4;

/// Link stroke width in CSS pixels.
pub const DEFAULT_LINK_WIDTH: f64 = 1.0;

/// Motion speed multiplier.
pub const DEFAULT_MOVE_SPEED: f64 = 1.5;

/// Radius in CSS pixels of the hover repulsion field.
pub const DEFAULT_REPULSE_DISTANCE: f64 = 100.0;

/// Seconds over which a repulsion impulse decays to zero.
pub const DEFAULT_REPULSE_DURATION_S: f64 = 0.4;

/// Particles spawned per click.
pub const DEFAULT_PUSH_QUANTITY: u32 = 4;

// ── Unit scales ─────────────────────────────────────────────────

/// CSS pixels per second of drift for one unit of `move_speed`.
pub const SPEED_PX_PER_UNIT: f64 = 60.0;

/// Opacity units per second for one unit of `opacity_anim_speed`.
pub const OPACITY_UNITS_PER_SPEED: f64 = 0.25;
