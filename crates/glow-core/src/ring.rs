use crate::color::{Color, GradientStop};
use crate::constants::{RING_INNER_STOP, RING_MID_HUE_SHIFT, RING_MID_STOP};
use crate::paint::{PaintError, Surface2d};
use crate::params::EngineParams;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// One drifting radial glow. The radius shrinks every tick and respawns at the
/// outer limit instead of being removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub radius: f32,
    pub speed: f32,
    pub angle: f32,
    pub offset: Vec2,
    pub hue: f32,
}

impl Ring {
    pub fn new(radius: f32, speed: f32, angle: f32, hue: f32) -> Self {
        Self {
            radius,
            speed,
            angle,
            offset: Vec2::ZERO,
            hue,
        }
    }

    /// Random ring with a starting radius anywhere below the respawn limit.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, params: &EngineParams, max_radius: f32) -> Self {
        let radius = max_radius * rng.gen::<f32>();
        let speed = rng.gen_range(params.ring_speed.clone());
        let angle = rng.gen::<f32>() * TAU;
        let hue = rng.gen::<f32>() * 360.0;
        Self::new(radius, speed, angle, hue)
    }

    pub fn update(&mut self, angle_step: f32, orbit_radius: f32, max_radius: f32) {
        self.radius -= self.speed;
        self.angle += angle_step;
        self.offset = Vec2::new(self.angle.cos(), self.angle.sin()) * orbit_radius;
        if self.radius < 0.0 {
            self.radius = max_radius;
        }
    }

    /// Gradient stops: bright core, hue-shifted midpoint, transparent rim.
    pub fn stops(&self) -> [GradientStop; 3] {
        let (o0, s0, l0, a0) = RING_INNER_STOP;
        let (o1, s1, l1, a1) = RING_MID_STOP;
        [
            GradientStop::new(o0, Color::hsla(self.hue, s0, l0, a0)),
            GradientStop::new(o1, Color::hsla(self.hue + RING_MID_HUE_SHIFT, s1, l1, a1)),
            GradientStop::new(1.0, Color::Transparent),
        ]
    }

    pub fn draw<S: Surface2d + ?Sized>(&self, surface: &mut S, center: Vec2) -> Result<(), PaintError> {
        surface.fill_radial_circle(center + self.offset, self.radius, &self.stops())
    }
}
