use anyhow::anyhow;
use glam::Vec2;
use glow_core::{EngineParams, PixelBuffer, PixelCanvas, PointerState, Scene, SurfaceMetrics};
use minifb::{Key, MouseMode, Window, WindowOptions};

const WINDOW_WIDTH: usize = 960;

// Straight-alpha RGBA composited over black into minifb's 0RGB layout.
fn blit(pixels: &PixelBuffer, out: &mut Vec<u32>) {
    out.resize(pixels.width as usize * pixels.height as usize, 0);
    for (dst, px) in out.iter_mut().zip(pixels.data.chunks_exact(4)) {
        let a = px[3] as u32;
        let r = px[0] as u32 * a / 255;
        let g = px[1] as u32 * a / 255;
        let b = px[2] as u32 * a / 255;
        *dst = (r << 16) | (g << 8) | b;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let params = EngineParams::default();
    let logical_height = params.logical_height;
    let mut metrics = SurfaceMetrics::resolve(WINDOW_WIDTH as f32, logical_height, None);

    let mut window = Window::new(
        "glow backdrop",
        metrics.physical_width as usize,
        metrics.physical_height as usize,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .map_err(|e| anyhow!("window init: {e}"))?;
    window.set_target_fps(60);

    let mut canvas = PixelCanvas::from_metrics(&metrics);
    let mut scene = Scene::new(params, metrics, rand::random())?;
    let mut pointer = PointerState::default();
    let mut frame = Vec::new();
    let mut frames: u64 = 0;

    log::info!(
        "[native] {}x{} rings={}",
        metrics.physical_width,
        metrics.physical_height,
        scene.rings().len()
    );

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let (w, _) = window.get_size();
        if w > 0 && w as u32 != metrics.physical_width {
            metrics = SurfaceMetrics::resolve(w as f32, logical_height, None);
            canvas.resize(&metrics);
            scene.resize(metrics);
            log::info!("[native] resized to {}x{}", metrics.physical_width, metrics.physical_height);
        }

        match window.get_mouse_pos(MouseMode::Discard) {
            Some((x, y)) => pointer.move_to(Vec2::new(x, y), Vec2::ZERO),
            None => pointer.leave(),
        }

        let stats = scene.tick(&mut canvas, &pointer);
        frames += 1;
        if frames % 600 == 0 {
            log::info!("[native] frame {frames}: {stats:?}");
        }

        blit(canvas.pixels(), &mut frame);
        window
            .update_with_buffer(&frame, canvas.width() as usize, canvas.height() as usize)
            .map_err(|e| anyhow!("window update: {e}"))?;
    }
    Ok(())
}
