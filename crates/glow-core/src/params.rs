use crate::constants::*;
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("{name} range is empty or inverted ({start}..{end})")]
    EmptyRange {
        name: &'static str,
        start: f32,
        end: f32,
    },
    #[error("{name} must be finite and non-negative, got {value}")]
    OutOfDomain { name: &'static str, value: f32 },
    #[error("ring count must be at least 1")]
    NoRings,
}

/// Every tunable of the backdrop in one place.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineParams {
    pub ring_count: usize,
    pub ring_speed: Range<f32>,
    pub ring_angle_step: f32,
    pub ring_respawn_factor: f32,
    pub ring_orbit_radius: f32,
    pub particle_size: Range<f32>,
    pub particle_lifespan: Range<f32>,
    pub particle_initial_alpha: f32,
    pub particle_velocity_jitter: f32,
    pub particle_squash: Range<f32>,
    pub trail_fade_alpha: f32,
    pub grain_amplitude: f32,
    pub logical_height: f32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            ring_count: RING_COUNT,
            ring_speed: RING_SPEED_MIN..RING_SPEED_MAX,
            ring_angle_step: RING_ANGLE_STEP,
            ring_respawn_factor: RING_RESPAWN_FACTOR,
            ring_orbit_radius: RING_ORBIT_RADIUS,
            particle_size: PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX,
            particle_lifespan: PARTICLE_LIFESPAN_MIN..PARTICLE_LIFESPAN_MAX,
            particle_initial_alpha: PARTICLE_INITIAL_ALPHA,
            particle_velocity_jitter: PARTICLE_VELOCITY_JITTER,
            particle_squash: PARTICLE_SQUASH_MIN..PARTICLE_SQUASH_MAX,
            trail_fade_alpha: TRAIL_FADE_ALPHA,
            grain_amplitude: GRAIN_AMPLITUDE,
            logical_height: LOGICAL_HEIGHT,
        }
    }
}

impl EngineParams {
    /// Reject anything that would make random sampling panic or produce NaN geometry.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.ring_count == 0 {
            return Err(ParamError::NoRings);
        }
        for (name, range) in [
            ("ring speed", &self.ring_speed),
            ("particle size", &self.particle_size),
            ("particle lifespan", &self.particle_lifespan),
            ("particle squash", &self.particle_squash),
        ] {
            let ok = range.start.is_finite()
                && range.end.is_finite()
                && range.start >= 0.0
                && range.start < range.end;
            if !ok {
                return Err(ParamError::EmptyRange {
                    name,
                    start: range.start,
                    end: range.end,
                });
            }
        }
        for (name, value) in [
            ("ring angle step", self.ring_angle_step),
            ("ring respawn factor", self.ring_respawn_factor),
            ("ring orbit radius", self.ring_orbit_radius),
            ("particle initial alpha", self.particle_initial_alpha),
            ("particle velocity jitter", self.particle_velocity_jitter),
            ("trail fade alpha", self.trail_fade_alpha),
            ("grain amplitude", self.grain_amplitude),
            ("logical height", self.logical_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamError::OutOfDomain { name, value });
            }
        }
        Ok(())
    }
}
