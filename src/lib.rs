//! Tidepool - animated backdrops for a layered ocean-diorama site
//!
//! Core modules:
//! - `field`: deterministic drifting-shape simulation (spawn, advance, reflect)
//! - `layer`: depth-layer mapping (terrain bands and creature lanes -> visual spec)
//! - `theme`: injected palette/period configuration
//! - `surface`: 2D drawing-surface seam (canvas on the web, recording elsewhere)
//! - `web`: browser platform layer (frame scheduling, canvas, diorama styling)

pub mod color;
pub mod field;
pub mod layer;
pub mod surface;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use color::Color;
pub use field::ShapeField;
pub use layer::{Layer, LayerSpec};
pub use surface::{RecordingSurface, Surface};
pub use theme::Theme;

/// Field and layer tuning constants
pub mod consts {
    /// Viewport area, in device pixels, backing one drifting shape
    pub const AREA_PER_SHAPE: u32 = 15_000;

    /// Shape radius draw range: `[MIN, MAX)` pixels
    pub const SHAPE_RADIUS_MIN: f32 = 20.0;
    pub const SHAPE_RADIUS_MAX: f32 = 50.0;

    /// Per-axis velocity draw range: `[-LIMIT, LIMIT)` pixels per tick
    pub const SHAPE_SPEED_LIMIT: f32 = 0.75;

    /// Steps on the dark-to-light depth scale
    pub const DEPTH_STEPS: u8 = 11;

    /// Entries in the shape color palette
    pub const SHAPE_COLORS: usize = 3;

    /// Entries in the drift period ladder (each step halves the previous)
    pub const PERIOD_STEPS: usize = 5;
}
