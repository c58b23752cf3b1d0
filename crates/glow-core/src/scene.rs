use crate::color::Color;
use crate::constants::TRAIL_FADE_RGB;
use crate::grain::apply_grain;
use crate::paint::Surface2d;
use crate::params::{EngineParams, ParamError};
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::ring::Ring;
use crate::surface::SurfaceMetrics;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// What one tick did, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub spawned: bool,
    pub pruned: usize,
    pub grain_applied: bool,
}

/// Owns the ring backdrop and the pointer trail and paints one frame per tick.
pub struct Scene {
    params: EngineParams,
    metrics: SurfaceMetrics,
    rings: Box<[Ring]>,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Scene {
    pub fn new(params: EngineParams, metrics: SurfaceMetrics, seed: u64) -> Result<Self, ParamError> {
        Self::with_rng(params, metrics, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(
        params: EngineParams,
        metrics: SurfaceMetrics,
        mut rng: StdRng,
    ) -> Result<Self, ParamError> {
        params.validate()?;
        let max_radius = params.ring_respawn_factor * metrics.physical_width as f32;
        let rings = (0..params.ring_count)
            .map(|_| Ring::random(&mut rng, &params, max_radius))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        log::debug!(
            "[scene] rings={} surface={}x{} scale={}",
            rings.len(),
            metrics.physical_width,
            metrics.physical_height,
            metrics.scale
        );
        Ok(Self {
            params,
            metrics,
            rings,
            particles: Vec::new(),
            rng,
        })
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    pub fn metrics(&self) -> &SurfaceMetrics {
        &self.metrics
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Outer limit for ring radii; a ring that shrinks past zero restarts here.
    pub fn max_ring_radius(&self) -> f32 {
        self.params.ring_respawn_factor * self.metrics.physical_width as f32
    }

    /// Adopt new surface dimensions. Rings wider than the new limit are pulled in.
    pub fn resize(&mut self, metrics: SurfaceMetrics) {
        self.metrics = metrics;
        let max_radius = self.max_ring_radius();
        for ring in self.rings.iter_mut() {
            ring.radius = ring.radius.clamp(0.0, max_radius);
        }
    }

    /// Paint one frame. Order: trail fade, rings, spawn, grain, particles.
    ///
    /// Host failures are logged and skipped for this tick only.
    pub fn tick<S: Surface2d + ?Sized>(&mut self, surface: &mut S, pointer: &PointerState) -> FrameStats {
        let mut stats = FrameStats::default();

        let [r, g, b] = TRAIL_FADE_RGB;
        let fade = Color::rgba(r, g, b, self.params.trail_fade_alpha);
        if let Err(e) = surface.fill_rect(Vec2::ZERO, self.metrics.physical_size(), fade) {
            log::debug!("[scene] trail fade skipped: {e}");
        }

        let center = self.metrics.center();
        let max_radius = self.max_ring_radius();
        for ring in self.rings.iter_mut() {
            ring.update(
                self.params.ring_angle_step,
                self.params.ring_orbit_radius,
                max_radius,
            );
            if let Err(e) = ring.draw(surface, center) {
                log::debug!("[scene] ring draw skipped: {e}");
            }
        }

        if let Some(at) = pointer.spawn_point() {
            self.particles
                .push(Particle::spawn(&mut self.rng, at, &self.params));
            stats.spawned = true;
        }

        stats.grain_applied = self.grain_pass(surface);

        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            p.update();
            if let Err(e) = p.draw(surface) {
                log::debug!("[scene] particle draw skipped: {e}");
            }
            !p.is_spent()
        });
        stats.pruned = before - self.particles.len();
        stats.particles = self.particles.len();
        stats
    }

    fn grain_pass<S: Surface2d + ?Sized>(&mut self, surface: &mut S) -> bool {
        let mut pixels = match surface.read_pixels() {
            Ok(p) => p,
            Err(e) => {
                log::debug!("[scene] grain skipped, read failed: {e}");
                return false;
            }
        };
        apply_grain(&mut pixels.data, self.params.grain_amplitude, &mut self.rng);
        match surface.write_pixels(&pixels) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("[scene] grain skipped, write failed: {e}");
                false
            }
        }
    }
}
