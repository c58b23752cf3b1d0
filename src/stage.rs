use crate::canvas::CanvasPainter;
use crate::dom;
use glam::Vec2;
use glow_core::{EngineParams, FrameStats, PointerState, Scene};
use web_sys as web;

/// Everything one mounted backdrop owns: the surface, the scene painted onto
/// it and the pointer state feeding the trail.
pub struct Stage {
    pub painter: CanvasPainter,
    pub scene: Scene,
    pub pointer: PointerState,
}

impl Stage {
    pub fn new(canvas: web::HtmlCanvasElement, params: EngineParams, seed: u64) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        let mut painter = CanvasPainter::new(canvas.clone(), ctx);
        let metrics = dom::sync_canvas_backing_size(&canvas, &mut painter, params.logical_height);
        let scene = Scene::new(params, metrics, seed)?;
        log::info!(
            "[stage] mounted {}x{} (dpr {})",
            metrics.physical_width,
            metrics.physical_height,
            metrics.scale
        );
        Ok(Self {
            painter,
            scene,
            pointer: PointerState::default(),
        })
    }

    pub fn resize(&mut self) {
        let canvas = self.painter.canvas().clone();
        let height = self.scene.params().logical_height;
        let metrics = dom::sync_canvas_backing_size(&canvas, &mut self.painter, height);
        log::debug!(
            "[stage] resized to {}x{} (dpr {})",
            metrics.physical_width,
            metrics.physical_height,
            metrics.scale
        );
        self.scene.resize(metrics);
    }

    /// Client coordinates from an input event, made local to the canvas.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        let rect = self.painter.canvas().get_bounding_client_rect();
        self.pointer.move_to(
            Vec2::new(client_x as f32, client_y as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
        );
    }

    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }

    pub fn tick(&mut self) -> FrameStats {
        self.scene.tick(&mut self.painter, &self.pointer)
    }
}
