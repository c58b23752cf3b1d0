#![cfg(target_arch = "wasm32")]
use crate::events::ListenerSet;
use crate::frame::AnimationLoop;
use crate::stage::Stage;
use glow_core::EngineParams;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod stage;

// Field order is teardown order: the loop stops before listeners detach.
struct Mounted {
    animation: AnimationLoop,
    listeners: ListenerSet,
    stage: Rc<RefCell<Stage>>,
}

fn mount_stage(canvas: web::HtmlCanvasElement, seed: u64) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let stage = Rc::new(RefCell::new(Stage::new(canvas, EngineParams::default(), seed)?));
    let listeners = events::wire_input_handlers(&stage, &window)?;
    let animation = AnimationLoop::start(stage.clone());
    Ok(Mounted {
        animation,
        listeners,
        stage,
    })
}

/// Handle to one animated backdrop. Mounting never throws: when the canvas or
/// its 2D context cannot be acquired the handle is inert and the page carries
/// on without the effect.
#[wasm_bindgen]
pub struct Backdrop {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl Backdrop {
    pub fn mount(canvas: web::HtmlCanvasElement) -> Backdrop {
        Self::mount_seeded(canvas, rand::random())
    }

    #[wasm_bindgen(js_name = mountSeeded)]
    pub fn mount_seeded(canvas: web::HtmlCanvasElement, seed: u64) -> Backdrop {
        match mount_stage(canvas, seed) {
            Ok(m) => Backdrop { mounted: Some(m) },
            Err(e) => {
                log::error!("backdrop mount failed: {:?}", e);
                Backdrop { mounted: None }
            }
        }
    }

    #[wasm_bindgen(js_name = mountById)]
    pub fn mount_by_id(element_id: &str) -> Backdrop {
        match dom::canvas_by_id(element_id) {
            Ok(canvas) => Self::mount(canvas),
            Err(e) => {
                log::error!("backdrop mount failed: {:?}", e);
                Backdrop { mounted: None }
            }
        }
    }

    /// Stop the loop and detach every listener. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.animation.stop();
            log::info!(
                "backdrop unmounted after {} frames ({} listeners released)",
                m.animation.frames(),
                m.listeners.len()
            );
        }
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.animation.is_running())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map(|m| m.stage.borrow().scene.particles().len())
            .unwrap_or(0)
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("glow-backdrop loaded");
    Ok(())
}
