//! Drawing surface abstraction
//!
//! The shape field renders through this trait so the simulation stays free
//! of platform types. The browser build backs it with a 2D canvas context;
//! tests and headless runs use [`RecordingSurface`] to assert on the exact
//! draw sequence instead of rasterized pixels.

use glam::Vec2;

use crate::color::Color;

/// Render target for one animation frame
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self);

    /// Paint a filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// One recorded drawing call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Surface that records calls instead of rasterizing
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Circle calls recorded since the most recent clear
    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_call_order() {
        let mut surface = RecordingSurface::new();
        surface.fill_circle(Vec2::new(1.0, 2.0), 3.0, Color::rgb(1, 2, 3));
        surface.clear();
        surface.fill_circle(Vec2::new(4.0, 5.0), 6.0, Color::rgb(4, 5, 6));
        surface.fill_circle(Vec2::new(7.0, 8.0), 9.0, Color::rgb(7, 8, 9));

        assert_eq!(surface.ops.len(), 4);
        assert_eq!(surface.ops[1], DrawOp::Clear);
        // Only calls after the latest clear count toward the frame
        let frame: Vec<_> = surface.circles().collect();
        assert_eq!(frame.len(), 2);
        assert_eq!(
            *frame[0],
            DrawOp::Circle {
                center: Vec2::new(4.0, 5.0),
                radius: 6.0,
                color: Color::rgb(4, 5, 6),
            }
        );
    }
}
