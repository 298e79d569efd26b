//! RAII handles over browser callbacks

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, Window};

/// An event listener that is removed from its target when dropped
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(callback);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// A pending `requestAnimationFrame`; cancelled if dropped before it fires.
///
/// The callback closure is owned by the caller and reused for every frame.
pub struct AnimationFrame {
    window: Window,
    id: i32,
}

impl AnimationFrame {
    pub fn request(window: &Window, callback: &Closure<dyn FnMut(f64)>) -> Result<Self, JsValue> {
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window: window.clone(),
            id,
        })
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        // Cancelling an already-fired request is a no-op
        if let Err(e) = self.window.cancel_animation_frame(self.id) {
            log::warn!("Failed to cancel animation frame {}: {:?}", self.id, e);
        }
    }
}
