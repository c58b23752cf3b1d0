// Host-side tests for the software canvas and colour model.

use glam::Vec2;
use glow_core::color::{hsl_to_rgb, sample_stops};
use glow_core::{Color, GradientStop, PaintError, PaintScope, PixelBuffer, PixelCanvas, Surface2d};

const OPAQUE_RED: Color = Color::rgba(255, 0, 0, 1.0);

#[test]
fn fill_rect_is_scaled_to_device_pixels() {
    let mut c = PixelCanvas::new(20, 20);
    c.set_scale(2.0);
    c.fill_rect(Vec2::ZERO, Vec2::new(5.0, 5.0), OPAQUE_RED).unwrap();
    assert_eq!(c.pixels().pixel(9, 9), Some([255, 0, 0, 255]));
    assert_eq!(c.pixels().pixel(10, 10), Some([0, 0, 0, 0]));
}

#[test]
fn trail_fade_composites_rather_than_clears() {
    let mut c = PixelCanvas::new(4, 4);
    let size = Vec2::new(4.0, 4.0);
    c.fill_rect(Vec2::ZERO, size, Color::rgba(255, 255, 255, 1.0)).unwrap();
    let fade = Color::rgba(10, 10, 10, 0.05);
    c.fill_rect(Vec2::ZERO, size, fade).unwrap();
    let [r, _, _, a] = c.pixels().pixel(1, 1).unwrap();
    assert!((242..=244).contains(&r), "r={r}");
    assert_eq!(a, 255);

    for _ in 0..200 {
        c.fill_rect(Vec2::ZERO, size, fade).unwrap();
    }
    // 8-bit rounding stalls the fade a little above the fill colour.
    let [r, _, _, _] = c.pixels().pixel(1, 1).unwrap();
    assert!(r <= 30, "trail did not fade, r={r}");
}

#[test]
fn save_restore_scopes_paint_state() {
    let mut c = PixelCanvas::new(1, 1);
    c.set_global_alpha(0.5);
    c.save();
    c.set_global_alpha(0.1);
    c.set_shadow(20.0, OPAQUE_RED);
    c.restore();
    assert_eq!(c.global_alpha(), 0.5);
    assert_eq!(c.shadow_blur(), 0.0);

    // Unbalanced restore leaves state alone.
    c.restore();
    assert_eq!(c.global_alpha(), 0.5);
}

#[test]
fn paint_scope_restores_on_drop() {
    let mut c = PixelCanvas::new(1, 1);
    {
        let mut scope = PaintScope::new(&mut c);
        scope.set_global_alpha(0.2);
        scope.set_shadow(12.0, OPAQUE_RED);
        assert_eq!(scope.save_depth(), 1);
    }
    assert_eq!(c.global_alpha(), 1.0);
    assert_eq!(c.shadow_blur(), 0.0);
    assert_eq!(c.save_depth(), 0);
}

#[test]
fn radial_circle_fills_inside_radius_only() {
    let mut c = PixelCanvas::new(40, 40);
    let stops = [
        GradientStop::new(0.0, OPAQUE_RED),
        GradientStop::new(1.0, Color::Transparent),
    ];
    c.fill_radial_circle(Vec2::new(20.0, 20.0), 10.0, &stops)
        .unwrap();
    let [r, g, _, a] = c.pixels().pixel(20, 20).unwrap();
    assert_eq!((r, g), (255, 0));
    assert!(a > 200, "core alpha {a}");
    let [.., edge_a] = c.pixels().pixel(28, 20).unwrap();
    assert!(edge_a < a, "gradient should fade outwards");
    assert_eq!(c.pixels().pixel(35, 20), Some([0, 0, 0, 0]));
}

#[test]
fn ellipse_glow_reaches_past_the_fill() {
    let mut c = PixelCanvas::new(60, 60);
    c.set_shadow(8.0, Color::rgba(0, 255, 0, 1.0));
    c.fill_ellipse(Vec2::new(30.0, 30.0), Vec2::new(10.0, 5.0), OPAQUE_RED)
        .unwrap();
    assert_eq!(c.pixels().pixel(30, 30), Some([255, 0, 0, 255]));
    let [r, g, _, a] = c.pixels().pixel(30, 37).unwrap();
    assert_eq!(r, 0);
    assert!(g > 0 && a > 0, "expected glow below the ellipse");
    assert_eq!(c.pixels().pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn global_alpha_scales_fills() {
    let mut c = PixelCanvas::new(2, 2);
    c.set_global_alpha(0.5);
    c.fill_rect(Vec2::ZERO, Vec2::new(2.0, 2.0), OPAQUE_RED).unwrap();
    assert_eq!(c.pixels().pixel(0, 0), Some([255, 0, 0, 128]));
}

#[test]
fn pixels_round_trip_and_reject_wrong_size() {
    let mut c = PixelCanvas::new(3, 2);
    let buf = PixelBuffer::filled(3, 2, [1, 2, 3, 4]);
    c.write_pixels(&buf).unwrap();
    assert_eq!(c.read_pixels().unwrap(), buf);

    let err = c.write_pixels(&PixelBuffer::new(2, 2)).unwrap_err();
    assert_eq!(
        err,
        PaintError::SizeMismatch {
            got_w: 2,
            got_h: 2,
            want_w: 3,
            want_h: 2
        }
    );
}

#[test]
fn colors_render_as_css() {
    assert_eq!(
        Color::hsla(200.0, 100.0, 70.0, 0.1).to_string(),
        "hsla(200, 100%, 70%, 0.1)"
    );
    assert_eq!(Color::rgba(10, 10, 10, 0.05).to_string(), "rgba(10, 10, 10, 0.05)");
    assert_eq!(Color::Transparent.to_string(), "transparent");
}

#[test]
fn hue_wraps_like_css() {
    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
    let a = hsl_to_rgb(30.0, 1.0, 0.5);
    let b = hsl_to_rgb(390.0, 1.0, 0.5);
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() < 1e-5);
    }
}

#[test]
fn fading_to_transparent_keeps_the_hue() {
    let stops = [
        GradientStop::new(0.0, OPAQUE_RED),
        GradientStop::new(1.0, Color::Transparent),
    ];
    let [r, g, b, a] = sample_stops(&stops, 0.5);
    assert!((r - 1.0).abs() < 1e-5);
    assert_eq!((g, b), (0.0, 0.0));
    assert!((a - 0.5).abs() < 1e-5);
}
