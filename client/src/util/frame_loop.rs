//! `requestAnimationFrame` loop with explicit teardown.
//!
//! The callback re-arms itself after every frame. [`FrameLoop::stop`] (or
//! dropping the loop) cancels the pending request and releases the closure,
//! which breaks the `Rc` cycle between the closure and its own holder.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Owned handle to a running animation-frame loop.
pub struct FrameLoop {
    holder: Rc<RefCell<Option<FrameCallback>>>,
    request_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Start calling `on_frame(timestamp_ms)` once per animation frame.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or the first request fails.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));

        let holder_for_cb = Rc::clone(&holder);
        let request_for_cb = Rc::clone(&request_id);
        let window_for_cb = window.clone();
        let cb = Closure::wrap(Box::new(move |timestamp: f64| {
            request_for_cb.set(None);
            on_frame(timestamp);
            let next = holder_for_cb
                .borrow()
                .as_ref()
                .map(|cb| window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()));
            match next {
                Some(Ok(id)) => request_for_cb.set(Some(id)),
                Some(Err(err)) => log::warn!("animation frame request failed: {err:?}"),
                None => {}
            }
        }) as Box<dyn FnMut(f64)>);

        let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        request_id.set(Some(id));
        *holder.borrow_mut() = Some(cb);
        Ok(Self { holder, request_id })
    }

    /// Cancel the pending frame and release the callback.
    pub fn stop(&self) {
        if let Some(id) = self.request_id.take() {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.cancel_animation_frame(id) {
                    log::warn!("cancel animation frame failed: {err:?}");
                }
            }
        }
        // Dropping the closure while it runs is invalid; stop is only
        // reachable from outside the frame callback.
        self.holder.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
