//! Deterministic shape field simulation
//!
//! The drifting-circle backdrop lives here. This module must be pure and
//! deterministic:
//! - One fixed step per animation frame
//! - Seeded RNG only, consumed at spawn time
//! - Stable iteration order (spawn order)
//! - No platform dependencies; drawing goes through the [`Surface`] seam
//!
//! [`Surface`]: crate::surface::Surface

pub mod state;
pub mod tick;

pub use state::{Shape, ShapeField, shape_count};
pub use tick::tick;
