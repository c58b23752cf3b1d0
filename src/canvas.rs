use glow_core::{Color, GradientStop, PaintError, PixelBuffer, Surface2d};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{Clamped, JsValue};
use web_sys as web;

/// `Surface2d` over a browser 2D context.
pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

fn rejected(op: &'static str) -> impl Fn(JsValue) -> PaintError {
    move |e| PaintError::rejected(op, format!("{:?}", e))
}

impl Surface2d for CanvasPainter {
    fn set_scale(&mut self, scale: f32) {
        let s = scale as f64;
        if let Err(e) = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0) {
            log::debug!("[canvas] setTransform rejected: {:?}", e);
        }
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_shadow(&mut self, blur: f32, color: Color) {
        self.ctx.set_shadow_blur(blur as f64);
        self.ctx.set_shadow_color(&color.to_string());
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) -> Result<(), PaintError> {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_radial_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        stops: &[GradientStop],
    ) -> Result<(), PaintError> {
        let (x, y, r) = (center.x as f64, center.y as f64, radius.max(0.0) as f64);
        let gradient = self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, r)
            .map_err(rejected("createRadialGradient"))?;
        for stop in stops {
            gradient
                .add_color_stop(stop.offset, &stop.color.to_string())
                .map_err(rejected("addColorStop"))?;
        }
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, TAU).map_err(rejected("arc"))?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
        Ok(())
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) -> Result<(), PaintError> {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.begin_path();
        self.ctx
            .ellipse(
                center.x as f64,
                center.y as f64,
                radii.x.max(0.0) as f64,
                radii.y.max(0.0) as f64,
                0.0,
                0.0,
                TAU,
            )
            .map_err(rejected("ellipse"))?;
        self.ctx.fill();
        Ok(())
    }

    fn read_pixels(&mut self) -> Result<PixelBuffer, PaintError> {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let image = self
            .ctx
            .get_image_data(0.0, 0.0, w as f64, h as f64)
            .map_err(rejected("getImageData"))?;
        Ok(PixelBuffer {
            width: image.width(),
            height: image.height(),
            data: image.data().0,
        })
    }

    fn write_pixels(&mut self, pixels: &PixelBuffer) -> Result<(), PaintError> {
        let image = web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(pixels.data.as_slice()),
            pixels.width,
            pixels.height,
        )
        .map_err(rejected("ImageData"))?;
        self.ctx
            .put_image_data(&image, 0.0, 0.0)
            .map_err(rejected("putImageData"))
    }
}
