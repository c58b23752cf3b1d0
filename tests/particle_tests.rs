// Host-side tests for the pointer-trail particles.

mod common;

use common::{Call, RecordingSurface};
use glam::Vec2;
use glow_core::particle::alpha_at;
use glow_core::{EngineParams, Particle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn spawn(seed: u64) -> Particle {
    let mut rng = StdRng::seed_from_u64(seed);
    Particle::spawn(&mut rng, Vec2::new(50.0, 50.0), &EngineParams::default())
}

#[test]
fn spawn_draws_from_configured_ranges() {
    let params = EngineParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = Particle::spawn(&mut rng, Vec2::ZERO, &params);
        assert!((20.0..50.0).contains(&p.size), "size {}", p.size);
        assert!((100.0..150.0).contains(&p.max_life), "lifespan {}", p.max_life);
        assert!((0.7..1.0).contains(&p.squash), "squash {}", p.squash);
        assert!((0.0..360.0).contains(&p.hue), "hue {}", p.hue);
        assert!(p.velocity.x.abs() <= 0.05 && p.velocity.y.abs() <= 0.05);
        assert_eq!(p.life, 0);
        assert_eq!(p.alpha, 0.05);
    }
}

#[test]
fn alpha_follows_linear_decay() {
    assert_eq!(alpha_at(0.05, 0, 120.0), 0.05);
    assert!((alpha_at(0.05, 60, 120.0) - 0.025).abs() < 1e-6);
    assert_eq!(alpha_at(0.05, 120, 120.0), 0.0);
    assert_eq!(alpha_at(0.05, 500, 120.0), 0.0);
}

#[test]
fn alpha_never_increases_and_hits_zero_at_lifespan() {
    for seed in 0..20 {
        let mut p = spawn(seed);
        let mut prev = p.alpha;
        for _ in 0..200 {
            p.update();
            assert!(p.alpha <= prev, "alpha rose at life {}", p.life);
            if p.life as f32 >= p.max_life {
                assert_eq!(p.alpha, 0.0);
            } else {
                assert!(p.alpha > 0.0);
            }
            prev = p.alpha;
        }
    }
}

#[test]
fn spent_exactly_when_life_reaches_lifespan() {
    for seed in 0..20 {
        let mut p = spawn(seed);
        let mut updates = 0u32;
        while !p.is_spent() {
            p.update();
            updates += 1;
        }
        assert_eq!(updates, p.max_life.ceil() as u32);
        assert!((100..=150).contains(&updates));
    }
}

#[test]
fn update_drifts_by_fixed_velocity() {
    let mut p = spawn(3);
    let start = p.position;
    for _ in 0..10 {
        p.update();
    }
    let expected = start + p.velocity * 10.0;
    assert!(p.position.distance(expected) < 1e-4);
}

#[test]
fn draw_scopes_alpha_and_glow() {
    let p = spawn(11);
    let mut s = RecordingSurface::new(4, 4);
    p.draw(&mut s).unwrap();

    let color = p.color();
    assert_eq!(
        s.calls,
        vec![
            Call::Save,
            Call::GlobalAlpha(p.alpha),
            Call::Shadow(p.size, color),
            Call::Ellipse(p.position, Vec2::new(p.size, p.size * p.squash), color),
            Call::Restore,
        ]
    );
    assert_eq!(s.depth, 0);
}

#[test]
fn draw_restores_paint_state_when_host_rejects() {
    let p = spawn(12);
    let mut s = RecordingSurface::new(4, 4);
    s.fail_ellipse = true;
    assert!(p.draw(&mut s).is_err());
    assert_eq!(s.depth, 0);
    assert_eq!(s.calls.last(), Some(&Call::Restore));
}

#[test]
fn draw_restores_paint_state_when_host_panics() {
    let p = spawn(13);
    let mut s = RecordingSurface::new(4, 4);
    s.panic_ellipse = true;
    let result = catch_unwind(AssertUnwindSafe(|| p.draw(&mut s)));
    assert!(result.is_err());
    assert_eq!(s.depth, 0);
}
