use crate::stage::Stage;
use glow_core::LoopGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop ticking one stage per display refresh.
///
/// Each callback schedules the next only after its tick returns. `stop`
/// cancels the pending request, and the gate makes any callback already in
/// flight return without ticking.
pub struct AnimationLoop {
    gate: Rc<RefCell<LoopGate<i32>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    pub fn start(stage: Rc<RefCell<Stage>>) -> Self {
        let gate: Rc<RefCell<LoopGate<i32>>> = Rc::new(RefCell::new(LoopGate::default()));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let gate_tick = gate.clone();
        // Weak so the closure does not keep itself alive after teardown.
        let callback_tick = Rc::downgrade(&callback);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !gate_tick.borrow_mut().begin_tick() {
                return;
            }
            let stats = stage.borrow_mut().tick();
            log::trace!("[frame] {:?}", stats);
            if let Some(cb) = callback_tick.upgrade() {
                request_frame(&gate_tick, &cb);
            }
        }) as Box<dyn FnMut()>));

        if gate.borrow_mut().start() {
            request_frame(&gate, &callback);
        }
        Self { gate, callback }
    }

    /// Cancel the pending frame. Idempotent.
    pub fn stop(&self) {
        if let Some(handle) = self.gate.borrow_mut().stop() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.gate.borrow().is_running()
    }

    pub fn frames(&self) -> u64 {
        self.gate.borrow().ticks()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
        self.callback.borrow_mut().take();
    }
}

fn request_frame(gate: &RefCell<LoopGate<i32>>, callback: &RefCell<Option<Closure<dyn FnMut()>>>) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = callback.borrow();
    let Some(cb) = cb.as_ref() else {
        return;
    };
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(handle) => gate.borrow_mut().arm(handle),
        Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
    }
}
