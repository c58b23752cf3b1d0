// Default tuning for the backdrop. `EngineParams::default()` is built from these.

// Surface
pub const LOGICAL_HEIGHT: f32 = 400.0; // fixed CSS height of the backdrop

// Rings
pub const RING_COUNT: usize = 5;
pub const RING_SPEED_MIN: f32 = 0.1; // radius shrink per tick
pub const RING_SPEED_MAX: f32 = 0.3;
pub const RING_ANGLE_STEP: f32 = 0.0005; // radians per tick
pub const RING_RESPAWN_FACTOR: f32 = 0.8; // of physical width
pub const RING_ORBIT_RADIUS: f32 = 100.0;

// Ring gradient stops: (offset, saturation %, lightness %, alpha)
pub const RING_INNER_STOP: (f32, f32, f32, f32) = (0.0, 100.0, 70.0, 0.1);
pub const RING_MID_STOP: (f32, f32, f32, f32) = (0.5, 100.0, 50.0, 0.05);
pub const RING_MID_HUE_SHIFT: f32 = 30.0;

// Particles
pub const PARTICLE_SIZE_MIN: f32 = 20.0;
pub const PARTICLE_SIZE_MAX: f32 = 50.0;
pub const PARTICLE_LIFESPAN_MIN: f32 = 100.0; // ticks
pub const PARTICLE_LIFESPAN_MAX: f32 = 150.0;
pub const PARTICLE_INITIAL_ALPHA: f32 = 0.05;
pub const PARTICLE_VELOCITY_JITTER: f32 = 0.05; // max |v| per axis per tick
pub const PARTICLE_SQUASH_MIN: f32 = 0.7; // vertical radius as a share of horizontal
pub const PARTICLE_SQUASH_MAX: f32 = 1.0;
pub const PARTICLE_SATURATION: f32 = 100.0;
pub const PARTICLE_LIGHTNESS: f32 = 70.0;

// Compositing
pub const TRAIL_FADE_RGB: [u8; 3] = [10, 10, 10];
pub const TRAIL_FADE_ALPHA: f32 = 0.05;
pub const GRAIN_AMPLITUDE: f32 = 5.0; // ± per channel value
