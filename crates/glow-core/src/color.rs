//! Colour values as the canvas understands them.
//!
//! `Display` produces CSS syntax so a browser context can take the value as a
//! fill or shadow style directly; `to_rgba` gives straight-alpha floats for the
//! software rasteriser.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// 8-bit channels with a 0..=1 alpha.
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent, 0..=1 alpha.
    Hsla { h: f32, s: f32, l: f32, a: f32 },
    Transparent,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
            Color::Transparent => 0.0,
        }
    }

    /// Straight-alpha `[r, g, b, a]`, every component in 0..=1.
    pub fn to_rgba(&self) -> [f32; 4] {
        match *self {
            Color::Rgba { r, g, b, a } => [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                a.clamp(0.0, 1.0),
            ],
            Color::Hsla { h, s, l, a } => {
                let [r, g, b] = hsl_to_rgb(h, s / 100.0, l / 100.0);
                [r, g, b, a.clamp(0.0, 1.0)]
            }
            Color::Transparent => [0.0, 0.0, 0.0, 0.0],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Color::Hsla { h, s, l, a } => write!(f, "hsla({h}, {s}%, {l}%, {a})"),
            Color::Transparent => f.write_str("transparent"),
        }
    }
}

/// One colour stop of a radial gradient; `offset` runs 0 (centre) to 1 (edge).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Sample a stop list at `t`, interpolating linearly between neighbours.
/// Stops must be sorted by offset; outside the list the end colours hold.
pub fn sample_stops(stops: &[GradientStop], t: f32) -> [f32; 4] {
    let Some(first) = stops.first() else {
        return [0.0; 4];
    };
    if t <= first.offset {
        return first.color.to_rgba();
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let k = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
            // Interpolate premultiplied so fading into `transparent` does not darken.
            let ca = premultiply(a.color.to_rgba());
            let cb = premultiply(b.color.to_rgba());
            let mut out = [0.0; 4];
            for i in 0..4 {
                out[i] = ca[i] + (cb[i] - ca[i]) * k;
            }
            return unpremultiply(out);
        }
    }
    stops[stops.len() - 1].color.to_rgba()
}

fn premultiply([r, g, b, a]: [f32; 4]) -> [f32; 4] {
    [r * a, g * a, b * a, a]
}

fn unpremultiply([r, g, b, a]: [f32; 4]) -> [f32; 4] {
    if a <= 0.0 {
        return [0.0; 4];
    }
    [r / a, g / a, b / a, a]
}

/// HSL to RGB with the hue wrapped into 0..360 the way CSS does.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(360.0) / 60.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m]
}
