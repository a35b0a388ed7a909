#![allow(clippy::float_cmp)]

use super::*;

// --- Defaults ---

#[test]
fn default_matches_reference_options() {
    let cfg = ParticleConfig::default();
    assert_eq!(cfg.count, 60);
    assert_eq!(cfg.density_area, 800.0);
    assert_eq!(cfg.opacity, 0.5);
    assert_eq!(cfg.opacity_min, 0.1);
    assert_eq!(cfg.size, 2.0);
    assert_eq!(cfg.link.distance, 150.0);
    assert_eq!(cfg.link.opacity, 0.4);
    assert_eq!(cfg.link.width, 1.0);
    assert_eq!(cfg.move_speed, 1.5);
    assert_eq!(cfg.repulse.distance, 100.0);
    assert_eq!(cfg.repulse.duration_s, 0.4);
    assert_eq!(cfg.push_quantity, 4);
}

#[test]
fn with_color_only_changes_color() {
    let cfg = ParticleConfig::with_color("#5a6861");
    let mut reference = ParticleConfig::default();
    reference.color = "#5a6861".to_owned();
    assert_eq!(cfg, reference);
}

// --- Derived rates ---

#[test]
fn speed_px_per_s_scales_move_speed() {
    let cfg = ParticleConfig::default();
    assert_eq!(cfg.speed_px_per_s(), 1.5 * crate::consts::SPEED_PX_PER_UNIT);
}

#[test]
fn opacity_rate_scales_anim_speed() {
    let mut cfg = ParticleConfig::default();
    cfg.opacity_anim_speed = 2.0;
    assert_eq!(cfg.opacity_rate_per_s(), 2.0 * crate::consts::OPACITY_UNITS_PER_SPEED);
}

// --- Density scaling ---

#[test]
fn scaled_count_at_reference_area_is_count() {
    let cfg = ParticleConfig::default();
    assert_eq!(cfg.scaled_count(800.0, 800.0), 60);
}

#[test]
fn scaled_count_grows_with_viewport() {
    let cfg = ParticleConfig::default();
    assert_eq!(cfg.scaled_count(1600.0, 800.0), 120);
}

#[test]
fn scaled_count_shrinks_with_viewport() {
    let cfg = ParticleConfig::default();
    assert_eq!(cfg.scaled_count(400.0, 400.0), 15);
}

#[test]
fn scaled_count_zero_viewport_is_zero() {
    let cfg = ParticleConfig::default();
    assert_eq!(cfg.scaled_count(0.0, 600.0), 0);
}

#[test]
fn scaled_count_tiny_viewport_keeps_one_particle() {
    let cfg = ParticleConfig::default();
    assert_eq!(cfg.scaled_count(10.0, 10.0), 1);
}

// --- Serialization round-trip of the declarative value ---

#[test]
fn config_serializes_as_plain_value() {
    let cfg = ParticleConfig::with_color("#a4b2ac");
    let json = serde_json::to_string(&cfg);
    assert!(json.is_ok());
}
