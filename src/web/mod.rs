//! Browser platform layer
//!
//! Everything that touches the DOM lives here:
//! - `frames`: start/stop wrapper around `requestAnimationFrame`
//! - `canvas`: 2D-canvas [`Surface`] implementation and sizing helper
//! - `animator`: the drifting-shape backdrop wired to one canvas
//! - `diorama`: inline styling for the terrain and creature layers
//!
//! [`Surface`]: crate::surface::Surface

pub mod animator;
pub mod canvas;
pub mod diorama;
pub mod frames;

pub use animator::ShapeFieldAnimator;
pub use canvas::CanvasSurface;
pub use frames::FrameScheduler;

use web_sys::Document;

use crate::theme::Theme;

/// Read the optional theme override embedded in the page.
///
/// Looks for `<script type="application/json" data-sea-theme>`; a missing
/// element means the defaults, malformed JSON logs a warning and falls back.
pub fn load_theme(document: &Document) -> Theme {
    let Some(el) = document
        .query_selector("script[data-sea-theme]")
        .ok()
        .flatten()
    else {
        return Theme::default();
    };
    let json = el.text_content().unwrap_or_default();
    match Theme::from_json(&json) {
        Ok(theme) => theme,
        Err(err) => {
            log::warn!("Ignoring malformed theme override: {}", err);
            Theme::default()
        }
    }
}
