use glam::Vec2;

/// Logical (CSS) and physical (device pixel) dimensions of the backdrop.
///
/// Physical size is always logical size times the device pixel ratio,
/// truncated to whole pixels like a canvas backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub logical_width: f32,
    pub logical_height: f32,
    pub scale: f32,
    pub physical_width: u32,
    pub physical_height: u32,
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self::resolve(0.0, 0.0, None)
    }
}

impl SurfaceMetrics {
    /// Compute metrics for a surface `css_width` wide and `logical_height` tall.
    /// A missing or nonsensical device pixel ratio counts as 1.
    pub fn resolve(css_width: f32, logical_height: f32, device_pixel_ratio: Option<f64>) -> Self {
        let dpr = effective_dpr(device_pixel_ratio);
        let logical_width = css_width.max(0.0);
        let logical_height = logical_height.max(0.0);
        Self {
            logical_width,
            logical_height,
            scale: dpr as f32,
            physical_width: (logical_width as f64 * dpr) as u32,
            physical_height: (logical_height as f64 * dpr) as u32,
        }
    }

    pub fn physical_size(&self) -> Vec2 {
        Vec2::new(self.physical_width as f32, self.physical_height as f32)
    }

    /// Half the backing-store size. Rings orbit around this point.
    pub fn center(&self) -> Vec2 {
        self.physical_size() * 0.5
    }

    pub fn pixel_count(&self) -> usize {
        self.physical_width as usize * self.physical_height as usize
    }
}

pub fn effective_dpr(raw: Option<f64>) -> f64 {
    match raw {
        Some(r) if r.is_finite() && r > 0.0 => r,
        _ => 1.0,
    }
}
