//! The drawing surface the engine paints on.
//!
//! A host implements [`Surface2d`] once (browser canvas, software buffer) and
//! the engine issues every call in logical units; the host owns the mapping to
//! device pixels through [`Surface2d::set_scale`]. Raw pixel access bypasses
//! the transform and always covers the whole physical buffer.

use crate::color::{Color, GradientStop};
use glam::Vec2;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaintError {
    #[error("host rejected {op}: {reason}")]
    Rejected { op: &'static str, reason: String },
    #[error("pixel buffer is {got_w}x{got_h}, surface is {want_w}x{want_h}")]
    SizeMismatch {
        got_w: u32,
        got_h: u32,
        want_w: u32,
        want_h: u32,
    },
}

impl PaintError {
    pub fn rejected(op: &'static str, reason: impl Into<String>) -> Self {
        PaintError::Rejected {
            op,
            reason: reason.into(),
        }
    }
}

/// Straight-alpha RGBA8 pixels, row-major, `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut buf = Self::new(width, height);
        for px in buf.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
        buf
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

/// Immediate-mode 2D drawing context.
pub trait Surface2d {
    /// Replace the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f32);

    /// Push the paint state (global alpha, shadow).
    fn save(&mut self);
    /// Pop the paint state pushed by the matching `save`.
    fn restore(&mut self);

    fn set_global_alpha(&mut self, alpha: f32);
    fn set_shadow(&mut self, blur: f32, color: Color);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) -> Result<(), PaintError>;

    /// Fill a full circle with a radial gradient running from `center` (offset 0)
    /// out to `radius` (offset 1).
    fn fill_radial_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
    ) -> Result<(), PaintError>;

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) -> Result<(), PaintError>;

    fn read_pixels(&mut self) -> Result<PixelBuffer, PaintError>;
    fn write_pixels(&mut self, pixels: &PixelBuffer) -> Result<(), PaintError>;
}

/// Paint state pushed for as long as the guard lives.
///
/// `restore` runs on drop, so an early `?` return or a panic inside the scope
/// cannot leave alpha or shadow settings behind for later draw calls.
pub struct PaintScope<'a, S: Surface2d + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface2d + ?Sized> PaintScope<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface2d + ?Sized> Deref for PaintScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface2d + ?Sized> DerefMut for PaintScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface2d + ?Sized> Drop for PaintScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
