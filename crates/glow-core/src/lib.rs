pub mod color;
pub mod constants;
pub mod grain;
pub mod paint;
pub mod params;
pub mod particle;
pub mod pointer;
pub mod raster;
pub mod ring;
pub mod scene;
pub mod schedule;
pub mod surface;

pub use color::*;
pub use constants::*;
pub use grain::apply_grain;
pub use paint::*;
pub use params::*;
pub use particle::Particle;
pub use pointer::PointerState;
pub use raster::PixelCanvas;
pub use ring::Ring;
pub use scene::{FrameStats, Scene};
pub use schedule::LoopGate;
pub use surface::{effective_dpr, SurfaceMetrics};
