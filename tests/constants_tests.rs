// Host-side tests for tuning constants and parameter validation.
// The front-end crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use glow_core::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_non_empty() {
    assert!(RING_SPEED_MIN < RING_SPEED_MAX);
    assert!(PARTICLE_SIZE_MIN < PARTICLE_SIZE_MAX);
    assert!(PARTICLE_LIFESPAN_MIN < PARTICLE_LIFESPAN_MAX);
    assert!(PARTICLE_SQUASH_MIN < PARTICLE_SQUASH_MAX);
    assert!(PARTICLE_SQUASH_MAX <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fades_are_translucent() {
    // Both must stay well below 1 or the trail and the particles stop looking soft.
    assert!(TRAIL_FADE_ALPHA > 0.0 && TRAIL_FADE_ALPHA < 0.5);
    assert!(PARTICLE_INITIAL_ALPHA > 0.0 && PARTICLE_INITIAL_ALPHA < 0.5);
    assert!(RING_INNER_STOP.3 > RING_MID_STOP.3);
}

#[test]
fn default_params_match_constants_and_validate() {
    let p = EngineParams::default();
    assert_eq!(p.ring_count, 5);
    assert_eq!(p.ring_speed, 0.1..0.3);
    assert_eq!(p.particle_lifespan, 100.0..150.0);
    assert_eq!(p.logical_height, 400.0);
    assert_eq!(p.grain_amplitude, 5.0);
    assert!(p.validate().is_ok());
}

#[test]
fn validate_rejects_inverted_range() {
    let p = EngineParams {
        particle_lifespan: 150.0..100.0,
        ..EngineParams::default()
    };
    match p.validate() {
        Err(ParamError::EmptyRange { name, .. }) => assert_eq!(name, "particle lifespan"),
        other => panic!("expected EmptyRange, got {other:?}"),
    }
}

#[test]
fn validate_rejects_zero_rings_and_nan() {
    let no_rings = EngineParams {
        ring_count: 0,
        ..EngineParams::default()
    };
    assert_eq!(no_rings.validate(), Err(ParamError::NoRings));

    let nan_grain = EngineParams {
        grain_amplitude: f32::NAN,
        ..EngineParams::default()
    };
    assert!(matches!(
        nan_grain.validate(),
        Err(ParamError::OutOfDomain { name: "grain amplitude", .. })
    ));
}

#[test]
fn scene_refuses_invalid_params() {
    let params = EngineParams {
        ring_speed: 0.3..0.3,
        ..EngineParams::default()
    };
    let metrics = SurfaceMetrics::resolve(100.0, 40.0, None);
    assert!(Scene::new(params, metrics, 1).is_err());
}

#[test]
fn every_wired_event_is_distinct() {
    for (i, a) in WIRED_EVENTS.iter().enumerate() {
        for b in &WIRED_EVENTS[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(WIRED_EVENTS.contains(&EVENT_POINTER_LEAVE));
    assert!(WIRED_EVENTS.contains(&EVENT_RESIZE));
}
