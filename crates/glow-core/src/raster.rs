//! Software implementation of [`Surface2d`] over an owned RGBA8 buffer.
//!
//! Good enough to preview the backdrop natively and to test frames end to end.
//! Pixels are sampled at their centres with no anti-aliasing; shadows are
//! only rendered for ellipses, as a linear halo over the blur radius.

use crate::color::{sample_stops, Color, GradientStop};
use crate::paint::{PaintError, PixelBuffer, Surface2d};
use crate::surface::SurfaceMetrics;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
struct PaintState {
    global_alpha: f32,
    shadow_blur: f32,
    shadow_color: Color,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            global_alpha: 1.0,
            shadow_blur: 0.0,
            shadow_color: Color::Transparent,
        }
    }
}

pub struct PixelCanvas {
    pixels: PixelBuffer,
    scale: f32,
    state: PaintState,
    stack: Vec<PaintState>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: PixelBuffer::new(width, height),
            scale: 1.0,
            state: PaintState::default(),
            stack: Vec::new(),
        }
    }

    pub fn from_metrics(metrics: &SurfaceMetrics) -> Self {
        let mut canvas = Self::new(metrics.physical_width, metrics.physical_height);
        canvas.set_scale(metrics.scale);
        canvas
    }

    /// Reallocate for new metrics. Like resizing a canvas element, this clears
    /// the pixels and resets transform and paint state.
    pub fn resize(&mut self, metrics: &SurfaceMetrics) {
        *self = Self::from_metrics(metrics);
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width
    }

    pub fn height(&self) -> u32 {
        self.pixels.height
    }

    pub fn global_alpha(&self) -> f32 {
        self.state.global_alpha
    }

    pub fn shadow_blur(&self) -> f32 {
        self.state.shadow_blur
    }

    /// Number of unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Source-over blend of a straight-alpha colour scaled by `coverage`.
    fn blend(&mut self, x: u32, y: u32, src: [f32; 4], coverage: f32) {
        let sa = src[3] * self.state.global_alpha * coverage;
        if sa <= 0.0 {
            return;
        }
        let i = (y as usize * self.pixels.width as usize + x as usize) * 4;
        let px = &mut self.pixels.data[i..i + 4];
        let da = px[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }
        for c in 0..3 {
            let d = px[c] as f32 / 255.0;
            let v = (src[c] * sa + d * da * (1.0 - sa)) / out_a;
            px[c] = (v * 255.0).round().clamp(0.0, 255.0) as u8;
        }
        px[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Physical pixel span `[lo, hi)` covering `lo_f..hi_f`, clipped to `limit`.
    fn span(lo_f: f32, hi_f: f32, limit: u32) -> (u32, u32) {
        let lo = lo_f.floor().max(0.0) as u32;
        let hi = (hi_f.ceil().max(0.0) as u32).min(limit);
        (lo.min(limit), hi)
    }
}

impl Surface2d for PixelCanvas {
    fn set_scale(&mut self, scale: f32) {
        self.scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        if alpha.is_finite() {
            self.state.global_alpha = alpha.clamp(0.0, 1.0);
        }
    }

    fn set_shadow(&mut self, blur: f32, color: Color) {
        self.state.shadow_blur = if blur.is_finite() { blur.max(0.0) } else { 0.0 };
        self.state.shadow_color = color;
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) -> Result<(), PaintError> {
        let lo = origin * self.scale;
        let hi = (origin + size) * self.scale;
        let (x0, x1) = Self::span(lo.x.round(), hi.x.round(), self.pixels.width);
        let (y0, y1) = Self::span(lo.y.round(), hi.y.round(), self.pixels.height);
        let src = color.to_rgba();
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, src, 1.0);
            }
        }
        Ok(())
    }

    fn fill_radial_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
    ) -> Result<(), PaintError> {
        let c = center * self.scale;
        let r = radius * self.scale;
        if r.is_nan() || r <= 0.0 || stops.is_empty() {
            return Ok(());
        }
        let (x0, x1) = Self::span(c.x - r, c.x + r, self.pixels.width);
        let (y0, y1) = Self::span(c.y - r, c.y + r, self.pixels.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(c);
                if d <= r {
                    self.blend(x, y, sample_stops(stops, d / r), 1.0);
                }
            }
        }
        Ok(())
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) -> Result<(), PaintError> {
        let c = center * self.scale;
        let rad = radii * self.scale;
        if rad.is_nan() || rad.min_element() <= 0.0 {
            return Ok(());
        }
        // Shadow blur is in device pixels and ignores the transform.
        let blur = self.state.shadow_blur;
        let shadow = self.state.shadow_color.to_rgba();
        let has_shadow = blur > 0.0 && shadow[3] > 0.0;
        let reach = rad + Vec2::splat(if has_shadow { blur } else { 0.0 });
        let mean_radius = (rad.x + rad.y) * 0.5;
        let fill = color.to_rgba();

        let (x0, x1) = Self::span(c.x - reach.x, c.x + reach.x, self.pixels.width);
        let (y0, y1) = Self::span(c.y - reach.y, c.y + reach.y, self.pixels.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let p = (Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - c) / rad;
                let n = p.length();
                if has_shadow {
                    let outside = (n - 1.0) * mean_radius;
                    let falloff = if outside <= 0.0 {
                        1.0
                    } else {
                        (1.0 - outside / blur).max(0.0)
                    };
                    self.blend(x, y, shadow, falloff);
                }
                if n <= 1.0 {
                    self.blend(x, y, fill, 1.0);
                }
            }
        }
        Ok(())
    }

    fn read_pixels(&mut self) -> Result<PixelBuffer, PaintError> {
        Ok(self.pixels.clone())
    }

    fn write_pixels(&mut self, pixels: &PixelBuffer) -> Result<(), PaintError> {
        if pixels.width != self.pixels.width
            || pixels.height != self.pixels.height
            || pixels.data.len() != self.pixels.data.len()
        {
            return Err(PaintError::SizeMismatch {
                got_w: pixels.width,
                got_h: pixels.height,
                want_w: self.pixels.width,
                want_h: self.pixels.height,
            });
        }
        self.pixels.data.copy_from_slice(&pixels.data);
        Ok(())
    }
}
