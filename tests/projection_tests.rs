// Host-side tests for the rotation + perspective projection.
// The main crate is wasm-only, so we include the pure core modules directly.

#![allow(dead_code)]
mod tree_core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
    pub mod interaction {
        include!("../src/core/interaction.rs");
    }
    pub mod paint {
        include!("../src/core/paint.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod projection {
        include!("../src/core/projection.rs");
    }
}

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::FRAC_PI_2;
use tree_core::config::FieldConfig;
use tree_core::field::ParticleField;
use tree_core::particles::*;
use tree_core::projection::*;

const EPS: f32 = 1e-3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn viewport_center_is_half_size() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.center(), glam::Vec2::new(400.0, 300.0));
}

#[test]
fn perspective_scale_matches_camera_formula() {
    assert!(approx(perspective_scale(0.0), 800.0 / 1200.0));
    assert!(approx(perspective_scale(250.0), 800.0 / 1450.0));
    assert!(approx(perspective_scale(-250.0), 800.0 / 950.0));
    // Nearer points are larger
    assert!(perspective_scale(-100.0) > perspective_scale(100.0));
}

#[test]
fn project_point_without_rotation() {
    let vp = Viewport::new(800.0, 600.0);
    let p = project_point(Vec3::new(120.0, -60.0, 0.0), 0.0, 1.0, vp);
    let s = 800.0 / 1200.0;
    assert!(approx(p.scale, s));
    assert!(approx(p.depth, 0.0));
    assert!(approx(p.screen.x, 120.0 * s + 400.0));
    assert!(approx(p.screen.y, -60.0 * s + 300.0));
}

#[test]
fn quarter_turn_moves_x_into_depth() {
    let vp = Viewport::new(800.0, 600.0);
    let p = project_point(Vec3::new(100.0, 0.0, 0.0), FRAC_PI_2, 1.0, vp);
    // x' = x cos r - z sin r = 0, z' = x sin r + z cos r = 100
    assert!(approx(p.depth, 100.0));
    assert!(approx(p.screen.x, 400.0));
    assert!(approx(p.scale, 800.0 / 1300.0));
}

#[test]
fn vertical_coordinate_is_not_rotated() {
    let vp = Viewport::new(800.0, 600.0);
    for r in [0.0_f32, 0.7, 2.0, 5.5] {
        let p = project_point(Vec3::new(0.0, 200.0, 0.0), r, 1.0, vp);
        assert!(approx(p.screen.y, 200.0 * (800.0 / 1200.0) + 300.0));
    }
}

#[test]
fn size_multiplies_scale_and_offset() {
    let vp = Viewport::new(400.0, 400.0);
    let one = project_point(Vec3::new(50.0, 80.0, 30.0), 0.3, 1.0, vp);
    let two = project_point(Vec3::new(50.0, 80.0, 30.0), 0.3, 2.0, vp);
    assert!(approx(two.scale, one.scale * 2.0));
    assert!(approx(two.screen.x - 200.0, (one.screen.x - 200.0) * 2.0));
    assert!(approx(two.screen.y - 200.0, (one.screen.y - 200.0) * 2.0));
    assert_eq!(one.depth, two.depth);
}

#[test]
fn zero_size_collapses_to_center() {
    let vp = Viewport::new(800.0, 600.0);
    let p = project_point(Vec3::new(200.0, -100.0, 50.0), 1.0, 0.0, vp);
    assert_eq!(p.scale, 0.0);
    assert_eq!(p.screen, vp.center());
}

#[test]
fn projection_is_deterministic() {
    let particles = sample_particles(200, &mut StdRng::seed_from_u64(11));
    let vp = Viewport::new(1024.0, 768.0);
    let mut a = Vec::new();
    let mut b = Vec::new();
    project_all(&particles, 1.234, 1.5, vp, &mut a);
    project_all(&particles, 1.234, 1.5, vp, &mut b);
    assert_eq!(a, b);
}

#[test]
fn projected_particle_carries_identity() {
    let p = Particle::new(0.4, 1.0, 0.5, 123.0);
    let out = project(&p, 0.0, 1.0, Viewport::new(10.0, 10.0));
    assert_eq!(out.height_fraction, 0.4);
    assert_eq!(out.color_offset, 123.0);
}

#[test]
fn depth_sort_puts_farthest_first() {
    let particles = sample_particles(500, &mut StdRng::seed_from_u64(5));
    let mut out = Vec::new();
    project_all(&particles, 0.8, 1.0, Viewport::new(800.0, 600.0), &mut out);
    depth_sort(&mut out);
    assert_eq!(out.len(), 500);
    for pair in out.windows(2) {
        assert!(pair[0].depth >= pair[1].depth);
    }
}

#[test]
fn depth_sort_keeps_ties_in_order() {
    let a = Particle::new(0.5, 0.0, 0.0, 1.0);
    let b = Particle::new(0.6, 0.0, 0.0, 2.0);
    let near = Particle::new(0.9, -FRAC_PI_2, 1.0, 3.0); // z < 0
    let mut out = Vec::new();
    project_all(&[a, near, b], 0.0, 1.0, Viewport::new(100.0, 100.0), &mut out);
    depth_sort(&mut out);
    let offsets: Vec<f32> = out.iter().map(|p| p.color_offset).collect();
    assert_eq!(offsets, vec![1.0, 2.0, 3.0]);
}

#[test]
fn star_scenario_at_800_by_600() {
    let config = FieldConfig {
        speed: 0.0,
        size: 1.0,
        base_hue: 0.0,
        particle_count: 100,
    };
    let field = ParticleField::new(config, 9);
    assert_eq!(field.rotation(), 0.0);
    let star = field.star(Viewport::new(800.0, 600.0));
    assert!(approx(star.scale, 0.6667));
    assert!(approx(star.screen.x, 400.0));
    assert!((star.screen.y - 126.67).abs() < 0.01);
    assert!(((star.scale * 8.0) - 5.33).abs() < 0.01);
}

#[test]
fn star_ignores_rotation() {
    let mut field = ParticleField::new(FieldConfig::default(), 9);
    let vp = Viewport::new(640.0, 480.0);
    let before = field.star(vp);
    field.set_rotation(2.5);
    let after = field.star(vp);
    assert!(approx(before.screen.x, after.screen.x));
    assert!(approx(before.screen.y, after.screen.y));
    assert!(approx(before.scale, after.scale));
}
