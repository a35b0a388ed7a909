#![allow(clippy::float_cmp)]

use super::*;

fn fixed(value: f64) -> impl FnMut() -> f64 {
    move || value
}

fn seeded_core(width: f64, height: f64) -> EngineCore {
    let mut core = EngineCore::new(ParticleConfig::default());
    let mut rand = fixed(0.5);
    core.resize(width, height, &mut rand);
    core
}

// --- Resize / density ---

#[test]
fn resize_seeds_density_scaled_count() {
    let core = seeded_core(800.0, 800.0);
    assert_eq!(core.particles().len(), 60);
}

#[test]
fn resize_smaller_truncates() {
    let mut core = seeded_core(800.0, 800.0);
    let mut rand = fixed(0.5);
    core.resize(400.0, 400.0, &mut rand);
    assert_eq!(core.particles().len(), 15);
}

#[test]
fn resize_larger_spawns_more() {
    let mut core = seeded_core(400.0, 400.0);
    let mut rand = fixed(0.5);
    core.resize(1600.0, 800.0, &mut rand);
    assert_eq!(core.particles().len(), 120);
}

#[test]
fn resize_zero_empties_field() {
    let mut core = seeded_core(800.0, 800.0);
    let mut rand = fixed(0.5);
    core.resize(0.0, 0.0, &mut rand);
    assert!(core.particles().is_empty());
}

// --- Step: integration and bounce ---

#[test]
fn step_integrates_velocity() {
    let mut core = seeded_core(800.0, 800.0);
    let before = core.particles()[0].clone();
    core.step(0.1);
    let after = &core.particles()[0];
    assert_eq!(after.pos.x, before.pos.x + before.vel.x * 0.1);
    assert_eq!(after.pos.y, before.pos.y + before.vel.y * 0.1);
}

#[test]
fn step_zero_dt_is_noop() {
    let mut core = seeded_core(800.0, 800.0);
    let before: Vec<_> = core.particles().to_vec();
    core.step(0.0);
    assert_eq!(core.particles(), &before[..]);
}

#[test]
fn step_bounces_at_right_edge() {
    let mut core = seeded_core(100.0, 100.0);
    // Long step drives every particle into a wall at least once.
    for _ in 0..100 {
        core.step(0.25);
    }
    for p in core.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 100.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 100.0);
    }
}

#[test]
fn step_reverses_velocity_on_bounce() {
    let mut core = seeded_core(50.0, 50.0);
    // Find a state right after a wall hit: velocity must point inward.
    for _ in 0..200 {
        core.step(0.1);
        for p in core.particles() {
            if p.pos.x == 0.0 {
                assert!(p.vel.x >= 0.0);
            }
            if p.pos.x == 50.0 {
                assert!(p.vel.x <= 0.0);
            }
        }
    }
}

// --- Step: opacity oscillation ---

#[test]
fn opacity_stays_within_configured_band() {
    let mut core = seeded_core(200.0, 200.0);
    let cfg = core.config().clone();
    for _ in 0..500 {
        core.step(0.05);
        for p in core.particles() {
            assert!(p.opacity >= cfg.opacity_min - 1e-9);
            assert!(p.opacity <= cfg.opacity + 1e-9);
        }
    }
}

#[test]
fn opacity_direction_flips_at_floor() {
    let mut core = seeded_core(200.0, 200.0);
    // Peak-spawned particles first descend; run until every one has turned.
    for _ in 0..500 {
        core.step(0.05);
    }
    assert!(core.particles().iter().any(|p| p.opacity_rising));
}

// --- Pointer: repulse ---

#[test]
fn hover_repulses_nearby_particle() {
    let mut core = EngineCore::new(ParticleConfig::default());
    let mut cfg = ParticleConfig::default();
    cfg.move_speed = 0.0;
    core.apply_config(cfg);
    let mut rand = fixed(0.5);
    core.resize(800.0, 800.0, &mut rand);
    // fixed(0.5) puts every particle at (400, 400); hover just left of them.
    core.hover(Point::new(390.0, 400.0));
    core.step(0.05);
    let p = core.particles()[0].pos;
    assert!(p.x > 400.0);
    assert_eq!(p.y, 400.0);
}

#[test]
fn repulse_decays_to_zero() {
    let mut core = seeded_core(800.0, 800.0);
    core.hover(Point::new(400.0, 400.0));
    // Decay horizon is 0.4 s; after that the impulse is spent.
    core.step(0.5);
    let before: Vec<_> = core
        .particles()
        .iter()
        .map(|p| p.pos)
        .collect();
    // Freeze drift so only repulsion could move anything.
    let mut cfg = core.config().clone();
    cfg.move_speed = 0.0;
    cfg.opacity_anim_speed = 0.0;
    core.apply_config(cfg);
    core.step(0.1);
    let after: Vec<_> = core.particles().iter().map(|p| p.pos).collect();
    assert_eq!(before, after);
}

#[test]
fn distant_particles_are_unaffected_by_hover() {
    let mut core = EngineCore::new(ParticleConfig::default());
    let mut cfg = ParticleConfig::default();
    cfg.move_speed = 0.0;
    core.apply_config(cfg);
    let mut rand = fixed(0.5);
    core.resize(800.0, 800.0, &mut rand);
    let before = core.particles()[0].pos;
    // All particles sit at (400, 400); pointer far outside the 100 px field.
    core.hover(Point::new(0.0, 0.0));
    core.step(0.05);
    assert_eq!(core.particles()[0].pos, before);
}

// --- Pointer: push ---

#[test]
fn push_adds_exactly_the_configured_quantity() {
    let mut core = seeded_core(800.0, 800.0);
    let before = core.particles().len();
    let mut rand = fixed(0.25);
    core.push(Point::new(100.0, 100.0), &mut rand);
    assert_eq!(core.particles().len(), before + 4);
}

#[test]
fn pushed_particles_spawn_at_the_click_point() {
    let mut core = seeded_core(800.0, 800.0);
    let mut rand = fixed(0.25);
    core.push(Point::new(123.0, 45.0), &mut rand);
    let spawned = &core.particles()[core.particles().len() - 4..];
    for p in spawned {
        assert_eq!(p.pos, Point::new(123.0, 45.0));
    }
}

// --- Config re-application ---

#[test]
fn apply_config_keeps_positions() {
    let mut core = seeded_core(800.0, 800.0);
    let before: Vec<_> = core.particles().iter().map(|p| p.pos).collect();
    core.apply_config(ParticleConfig::with_color("#5a6861"));
    let after: Vec<_> = core.particles().iter().map(|p| p.pos).collect();
    assert_eq!(before, after);
}

#[test]
fn apply_config_swaps_color() {
    let mut core = seeded_core(800.0, 800.0);
    core.apply_config(ParticleConfig::with_color("#5a6861"));
    assert_eq!(core.config().color, "#5a6861");
}

#[test]
fn apply_config_rescales_drift_speed() {
    let mut core = seeded_core(800.0, 800.0);
    let mut cfg = ParticleConfig::default();
    cfg.move_speed = 3.0;
    core.apply_config(cfg.clone());
    for p in core.particles() {
        let speed = p.vel.x.hypot(p.vel.y);
        assert!((speed - cfg.speed_px_per_s()).abs() < 1e-9);
    }
}
