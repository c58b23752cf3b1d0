use anyhow::anyhow;
use glow_core::{Surface2d, SurfaceMetrics};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(element_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow!("no document"))?;
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow!("missing #{element_id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{element_id} is not a canvas: {:?}", e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("unexpected context type: {:?}", e))
}

/// Size the backing store to CSS width x `logical_height` times the device
/// pixel ratio, scale drawing back to logical units, and pin the CSS size so
/// the larger buffer does not stretch the element.
pub fn sync_canvas_backing_size<S: Surface2d + ?Sized>(
    canvas: &web::HtmlCanvasElement,
    surface: &mut S,
    logical_height: f32,
) -> SurfaceMetrics {
    let dpr = web::window().map(|w| w.device_pixel_ratio());
    let metrics = SurfaceMetrics::resolve(canvas.client_width() as f32, logical_height, dpr);
    canvas.set_width(metrics.physical_width);
    canvas.set_height(metrics.physical_height);
    surface.set_scale(metrics.scale);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", metrics.logical_width));
    _ = style.set_property("height", &format!("{}px", metrics.logical_height));
    metrics
}
