//! Inline styling for the terrain and creature layers
//!
//! The page ships static markup for each depth band and sprite lane; this
//! module reads their `data-*` indices, resolves each against the theme,
//! and writes the result back as inline CSS. Keyframes in the page's
//! stylesheet do the actual drifting; only the per-layer numbers come
//! from here.

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::layer::{Layer, LayerSpec};
use crate::theme::Theme;

/// Style every `[data-terrain-layer]` and `[data-creature-layer]` element.
///
/// Returns how many of each were styled. Elements with a missing or
/// unparseable index get the fallback styling rather than an error.
pub fn apply(document: &Document, theme: &Theme) -> (usize, usize) {
    let mut bands = 0;
    for (el, index) in layer_elements(document, "data-terrain-layer") {
        style_band(&el, &Layer::Terrain(index).spec(theme));
        bands += 1;
    }
    let mut sprites = 0;
    for (el, index) in layer_elements(document, "data-creature-layer") {
        style_sprite(&el, &Layer::Creature(index).spec(theme));
        sprites += 1;
    }
    (bands, sprites)
}

fn layer_elements(document: &Document, attr: &str) -> Vec<(HtmlElement, u8)> {
    let selector = format!("[{}]", attr);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(el) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        // An unparseable index lands on the fallback row
        let index = el
            .get_attribute(attr)
            .and_then(|v| v.parse::<u8>().ok())
            .unwrap_or(u8::MAX);
        found.push((el, index));
    }
    found
}

/// Terrain bands are plain blocks: painted, stacked, optionally drifting
fn style_band(el: &HtmlElement, spec: &LayerSpec) {
    let style = el.style();
    let _ = style.set_property("background-color", &spec.color.css());
    let _ = style.set_property("z-index", &spec.css_z_index());
    match spec.css_animation_duration() {
        Some(duration) => {
            let _ = style.set_property("animation-duration", &duration);
        }
        None => {
            let _ = style.set_property("animation", "none");
        }
    }
}

/// Sprites tint through `currentColor` and carry scale/offset nudges
fn style_sprite(el: &HtmlElement, spec: &LayerSpec) {
    let style = el.style();
    let _ = style.set_property("color", &spec.color.css());
    let _ = style.set_property("z-index", &spec.css_z_index());
    match spec.css_animation_duration() {
        Some(duration) => {
            let _ = style.set_property("animation-duration", &duration);
        }
        None => {
            let _ = style.set_property("animation", "none");
        }
    }
    if let Some(scale) = spec.css_scale() {
        let _ = style.set_property("scale", &scale);
    }
    if let Some(translate) = spec.css_translate() {
        let _ = style.set_property("translate", &translate);
    }
}
