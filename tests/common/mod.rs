// Surface double that records every call and can be told to fail.
#![allow(dead_code)]

use glam::Vec2;
use glow_core::{Color, GradientStop, PaintError, PixelBuffer, Surface2d};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetScale(f32),
    Save,
    Restore,
    GlobalAlpha(f32),
    Shadow(f32, Color),
    FillRect(Vec2, Vec2, Color),
    RadialCircle(Vec2, f32, Vec<GradientStop>),
    Ellipse(Vec2, Vec2, Color),
    ReadPixels,
    WritePixels,
}

pub struct RecordingSurface {
    pub calls: Vec<Call>,
    pub depth: i32,
    pub width: u32,
    pub height: u32,
    pub fail_ellipse: bool,
    pub panic_ellipse: bool,
    pub fail_read: bool,
    pub fail_write: bool,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            calls: Vec::new(),
            depth: 0,
            width,
            height,
            fail_ellipse: false,
            panic_ellipse: false,
            fail_read: false,
            fail_write: false,
        }
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn ellipses(&self) -> usize {
        self.count(|c| matches!(c, Call::Ellipse(..)))
    }
}

impl Surface2d for RecordingSurface {
    fn set_scale(&mut self, scale: f32) {
        self.calls.push(Call::SetScale(scale));
    }

    fn save(&mut self) {
        self.depth += 1;
        self.calls.push(Call::Save);
    }

    fn restore(&mut self) {
        self.depth -= 1;
        self.calls.push(Call::Restore);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.calls.push(Call::GlobalAlpha(alpha));
    }

    fn set_shadow(&mut self, blur: f32, color: Color) {
        self.calls.push(Call::Shadow(blur, color));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) -> Result<(), PaintError> {
        self.calls.push(Call::FillRect(origin, size, color));
        Ok(())
    }

    fn fill_radial_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
    ) -> Result<(), PaintError> {
        self.calls
            .push(Call::RadialCircle(center, radius, stops.to_vec()));
        Ok(())
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) -> Result<(), PaintError> {
        self.calls.push(Call::Ellipse(center, radii, color));
        if self.panic_ellipse {
            panic!("ellipse exploded");
        }
        if self.fail_ellipse {
            return Err(PaintError::rejected("ellipse", "test"));
        }
        Ok(())
    }

    fn read_pixels(&mut self) -> Result<PixelBuffer, PaintError> {
        self.calls.push(Call::ReadPixels);
        if self.fail_read {
            return Err(PaintError::rejected("getImageData", "tainted"));
        }
        Ok(PixelBuffer::new(self.width, self.height))
    }

    fn write_pixels(&mut self, _pixels: &PixelBuffer) -> Result<(), PaintError> {
        self.calls.push(Call::WritePixels);
        if self.fail_write {
            return Err(PaintError::rejected("putImageData", "detached"));
        }
        Ok(())
    }
}
