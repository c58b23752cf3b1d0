use super::ListenerSet;
use crate::constants::{
    EVENT_POINTER_LEAVE, EVENT_POINTER_MOVE, EVENT_RESIZE, EVENT_TOUCH_MOVE, WIRED_EVENTS,
};
use crate::stage::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Install resize, move, touch and leave handlers for `stage`.
pub fn wire_input_handlers(
    stage: &Rc<RefCell<Stage>>,
    window: &web::Window,
) -> anyhow::Result<ListenerSet> {
    let canvas: web::EventTarget = stage.borrow().painter.canvas().clone().into();
    let mut set = ListenerSet::default();

    let s = stage.clone();
    set.listen(window, EVENT_RESIZE, move |_ev| {
        s.borrow_mut().resize();
    })?;

    let s = stage.clone();
    set.listen(&canvas, EVENT_POINTER_MOVE, move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            s.borrow_mut()
                .pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
        }
    })?;

    let s = stage.clone();
    set.listen(&canvas, EVENT_TOUCH_MOVE, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        if let Some(touch) = ev.touches().get(0) {
            s.borrow_mut()
                .pointer_moved(touch.client_x() as f64, touch.client_y() as f64);
        }
    })?;

    let s = stage.clone();
    set.listen(&canvas, EVENT_POINTER_LEAVE, move |_ev| {
        s.borrow_mut().pointer_left();
    })?;

    debug_assert_eq!(set.len(), WIRED_EVENTS.len());
    log::debug!("[events] wired {:?}", WIRED_EVENTS);
    Ok(set)
}
