//! Animation-frame scheduling
//!
//! The browser drives the backdrop through `requestAnimationFrame`. This
//! wrapper owns both the callback closure and the pending frame handle, so
//! stopping it cancels the queued frame and drops the closure; a stopped
//! scheduler cannot fire again.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;

/// Start/stop handle for a self-re-queueing animation-frame loop
#[derive(Default)]
pub struct FrameScheduler {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    /// Handle of the queued frame, if one is pending
    raf_id: Cell<Option<i32>>,
    /// The live callback; `None` while stopped
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Inner {
    fn request_frame(&self) {
        let callback = self.callback.borrow();
        let Some(closure) = callback.as_ref() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(err) => log::warn!("requestAnimationFrame failed: {:?}", err),
        }
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `frame` once per animation frame until [`stop`] is called.
    ///
    /// The callback re-queues itself through a weak handle, so dropping the
    /// scheduler ends the loop even with a frame in flight. A loop already
    /// running is stopped first.
    ///
    /// [`stop`]: FrameScheduler::stop
    pub fn start<F>(&mut self, mut frame: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.stop();
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        let closure = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.raf_id.set(None);
                frame(time);
                inner.request_frame();
            }
        });
        self.inner.callback.replace(Some(closure));
        self.inner.request_frame();
    }

    /// Cancel the queued frame and drop the callback.
    ///
    /// Called from event and boot context in this crate, never from inside
    /// the frame callback itself.
    pub fn stop(&mut self) {
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.inner.callback.replace(None);
    }

    /// True while a frame is queued
    pub fn is_running(&self) -> bool {
        self.inner.raf_id.get().is_some()
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
