pub mod pointer;

pub use pointer::wire_input_handlers;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners installed together and removed together.
///
/// Dropping the set detaches every listener and frees its closure, so no
/// handler can outlive the stage it captured.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("addEventListener({event}) failed: {:?}", e))?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        for l in self.listeners.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.closure.as_ref().unchecked_ref());
        }
    }
}
