//! 2D-canvas drawing surface
//!
//! Implements [`Surface`] over a `CanvasRenderingContext2d`, plus the
//! backing-store sizing helper shared by mount and resize.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::color::Color;
use crate::surface::Surface;

/// [`Surface`] backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Wrap the canvas's 2D context at its current backing-store size
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius),
            0.0,
            TAU,
        );
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }
}

/// Match the canvas backing store to its CSS size at device resolution.
///
/// Returns the device-pixel size, which is zero while the canvas has no
/// layout box.
pub fn fit_to_display(canvas: &HtmlCanvasElement, window: &Window) -> (u32, u32) {
    let dpr = window.device_pixel_ratio();
    let width = (canvas.client_width() as f64 * dpr) as u32;
    let height = (canvas.client_height() as f64 * dpr) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}
