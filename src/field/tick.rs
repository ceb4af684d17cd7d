//! Per-frame field step
//!
//! Advances every shape one step and redraws the frame. Displacement is per
//! step rather than time-scaled, so a throttled frame rate slows the drift
//! instead of making it jump.

use crate::surface::Surface;

use super::state::ShapeField;

/// Advance the field one step and redraw it.
///
/// Frame order: clear, then per shape in spawn order advance, reflect off
/// the viewport band, draw. Reflection flips the velocity component only;
/// the position drawn is the freshly advanced one. Both axes are checked
/// every step, so a shape out of band on both reflects on both.
pub fn tick(field: &mut ShapeField, surface: &mut impl Surface) {
    surface.clear();
    let (width, height) = (field.width, field.height);
    for shape in &mut field.shapes {
        shape.pos += shape.vel;
        if shape.pos.x < shape.radius || shape.pos.x > width - shape.radius {
            shape.vel.x = -shape.vel.x;
        }
        if shape.pos.y < shape.radius || shape.pos.y > height - shape.radius {
            shape.vel.y = -shape.vel.y;
        }
        surface.fill_circle(shape.pos, shape.radius, shape.color);
    }
}
