//! The drifting-shape backdrop wired to one canvas
//!
//! Owns the field state, the frame scheduler, and the canvas it paints.
//! Resizes rebuild the population from scratch; a collapsed viewport parks
//! the animator until space comes back.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::field::{self, ShapeField};
use crate::theme::Theme;

use super::canvas::{CanvasSurface, fit_to_display};
use super::frames::FrameScheduler;

pub struct ShapeFieldAnimator {
    canvas: HtmlCanvasElement,
    theme: Theme,
    field: Rc<RefCell<ShapeField>>,
    scheduler: FrameScheduler,
}

impl ShapeFieldAnimator {
    /// Size the canvas, spawn the field, and start the frame loop.
    ///
    /// A zero-area canvas mounts parked: no shapes, no queued frames.
    pub fn mount(canvas: HtmlCanvasElement, theme: Theme, seed: u64) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let (width, height) = fit_to_display(&canvas, &window);
        let field = ShapeField::new(width, height, &theme, seed);
        log::info!(
            "Backdrop mounted: {}x{} device px, {} shapes, seed {}",
            width,
            height,
            field.shapes.len(),
            seed
        );

        let mut animator = Self {
            canvas,
            theme,
            field: Rc::new(RefCell::new(field)),
            scheduler: FrameScheduler::new(),
        };
        if width > 0 && height > 0 {
            animator.start()?;
        }
        Ok(animator)
    }

    /// Re-measure the canvas, rebuild the population, restart the loop.
    ///
    /// The old shape set is discarded wholesale. The field's RNG stream
    /// continues, so every resize lands a fresh layout.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        self.scheduler.stop();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let (width, height) = fit_to_display(&self.canvas, &window);
        self.field.borrow_mut().resize(width, height, &self.theme);
        if width > 0 && height > 0 {
            self.start()?;
        } else {
            log::debug!("Backdrop parked: zero-area viewport");
        }
        Ok(())
    }

    /// Stop the frame loop; the canvas keeps its last frame
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    fn start(&mut self) -> Result<(), JsValue> {
        let mut surface = CanvasSurface::new(&self.canvas)?;
        let field = Rc::clone(&self.field);
        self.scheduler.start(move |_time| {
            let mut field = field.borrow_mut();
            field::tick(&mut field, &mut surface);
        });
        Ok(())
    }
}
