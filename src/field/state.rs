//! Shape field state and spawning
//!
//! Shape population scales with viewport area; the RNG is seeded once per
//! field and its stream carries across resizes.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::color::Color;
use crate::consts::*;
use crate::theme::Theme;

/// One drifting circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub pos: Vec2,
    /// Displacement applied each tick, in pixels per axis
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// How many shapes a viewport of the given size carries
pub fn shape_count(width: u32, height: u32) -> usize {
    ((u64::from(width) * u64::from(height)) / u64::from(AREA_PER_SHAPE)) as usize
}

/// The whole drifting backdrop for one viewport
#[derive(Debug, Clone)]
pub struct ShapeField {
    pub width: f32,
    pub height: f32,
    /// Shapes in spawn order; ticks iterate and draw in this order
    pub shapes: Vec<Shape>,
    rng: Pcg32,
}

impl ShapeField {
    /// Build a field for a viewport, spawning one shape per
    /// [`AREA_PER_SHAPE`] device pixels (rounded down)
    pub fn new(width: u32, height: u32, theme: &Theme, seed: u64) -> Self {
        let mut field = Self {
            width: width as f32,
            height: height as f32,
            shapes: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };
        field.populate(width, height, theme);
        field
    }

    /// Discard every shape and respawn the set for a new viewport size.
    ///
    /// The RNG stream continues rather than restarting, so repeated resizes
    /// produce fresh layouts.
    pub fn resize(&mut self, width: u32, height: u32, theme: &Theme) {
        self.width = width as f32;
        self.height = height as f32;
        self.shapes.clear();
        self.populate(width, height, theme);
    }

    fn populate(&mut self, width: u32, height: u32, theme: &Theme) {
        let count = shape_count(width, height);
        self.shapes.reserve(count);
        for _ in 0..count {
            let shape = spawn_shape(&mut self.rng, self.width, self.height, theme);
            self.shapes.push(shape);
        }
    }
}

/// Draw order is fixed: position, radius, velocity, color
fn spawn_shape(rng: &mut Pcg32, width: f32, height: f32, theme: &Theme) -> Shape {
    let pos = Vec2::new(
        rng.random_range(0.0..width),
        rng.random_range(0.0..height),
    );
    let radius = rng.random_range(SHAPE_RADIUS_MIN..SHAPE_RADIUS_MAX);
    let vel = Vec2::new(
        rng.random_range(-SHAPE_SPEED_LIMIT..SHAPE_SPEED_LIMIT),
        rng.random_range(-SHAPE_SPEED_LIMIT..SHAPE_SPEED_LIMIT),
    );
    let color = theme.shape_palette[rng.random_range(0..SHAPE_COLORS)];
    Shape {
        pos,
        vel,
        radius,
        color,
    }
}
