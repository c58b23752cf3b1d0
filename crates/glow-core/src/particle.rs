use crate::color::Color;
use crate::constants::{PARTICLE_LIGHTNESS, PARTICLE_SATURATION};
use crate::paint::{PaintError, PaintScope, Surface2d};
use crate::params::EngineParams;
use glam::Vec2;
use rand::Rng;

/// Short-lived soft blob left behind by the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    /// Vertical radius as a share of `size`.
    pub squash: f32,
    pub hue: f32,
    /// Ticks since spawn.
    pub life: u32,
    pub max_life: f32,
    pub initial_alpha: f32,
    pub alpha: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, position: Vec2, params: &EngineParams) -> Self {
        let jitter = params.particle_velocity_jitter;
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * jitter,
            (rng.gen::<f32>() - 0.5) * 2.0 * jitter,
        );
        Self {
            position,
            velocity,
            size: rng.gen_range(params.particle_size.clone()),
            squash: rng.gen_range(params.particle_squash.clone()),
            hue: rng.gen::<f32>() * 360.0,
            life: 0,
            max_life: rng.gen_range(params.particle_lifespan.clone()),
            initial_alpha: params.particle_initial_alpha,
            alpha: params.particle_initial_alpha,
        }
    }

    pub fn update(&mut self) {
        self.position += self.velocity;
        self.life += 1;
        self.alpha = alpha_at(self.initial_alpha, self.life, self.max_life);
    }

    pub fn is_spent(&self) -> bool {
        self.alpha <= 0.0
    }

    pub fn color(&self) -> Color {
        Color::hsla(self.hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS, self.alpha)
    }

    /// Soft ellipse with a glow as wide as the particle. Alpha and shadow are
    /// scoped to this call.
    pub fn draw<S: Surface2d + ?Sized>(&self, surface: &mut S) -> Result<(), PaintError> {
        let color = self.color();
        let mut scope = PaintScope::new(surface);
        scope.set_global_alpha(self.alpha);
        scope.set_shadow(self.size, color);
        scope.fill_ellipse(
            self.position,
            Vec2::new(self.size, self.size * self.squash),
            color,
        )
    }
}

/// Linear fade from `initial` at birth to zero at `max_life`.
pub fn alpha_at(initial: f32, life: u32, max_life: f32) -> f32 {
    let life = life as f32;
    if life >= max_life {
        0.0
    } else {
        initial * (1.0 - life / max_life)
    }
}
