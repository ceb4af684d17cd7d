//! Depth-layer mapping for the parallax backdrop
//!
//! Terrain bands and creature sprites are addressed by small integer indices
//! in the page markup. This module turns an index into concrete styling: a
//! palette color, a stacking order, and optional drift animation settings.
//! The mapping is a pure total function of `(Layer, &Theme)`; unknown indices
//! fall back to a still panel at the nearest depth instead of failing.

use std::time::Duration;

use crate::color::Color;
use crate::consts::DEPTH_STEPS;
use crate::theme::Theme;

/// A backdrop element addressed by its index in the page markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Horizontal band of the scene, indices 1 (nearest) through 6 (deepest)
    Terrain(u8),
    /// Drifting sprite slotted between the bands, indices 2, 5 and 8
    Creature(u8),
}

/// Resolved styling for one layer
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    /// Fill or tint color drawn from the depth palette
    pub color: Color,
    /// CSS z-index; higher values sit nearer the viewer
    pub stack_order: u8,
    /// Drift animation period, `None` for layers that hold still
    pub period: Option<Duration>,
    /// Sprite scale factor, creatures only
    pub size_scale: Option<f32>,
    /// Vertical nudge as a percentage of the sprite box, creatures only
    pub offset_percent: Option<f32>,
}

impl Layer {
    /// Resolve a layer against a theme.
    ///
    /// Total over all indices: anything outside the mapped set gets the
    /// fallback (nearest depth color and stacking, no animation).
    pub fn spec(self, theme: &Theme) -> LayerSpec {
        match self {
            Layer::Terrain(index) => {
                let rank = match index {
                    1 => 1,
                    2 => 3,
                    3 => 5,
                    4 => 6,
                    5 => 8,
                    6 => 10,
                    _ => 1,
                };
                // Band 1 and unknown indices hold still; the rest walk the
                // period ladder front-to-back, halving at each step.
                let period = matches!(index, 2..=6)
                    .then(|| theme.period(usize::from(index) - 2));
                LayerSpec {
                    color: theme.depth_color(rank),
                    stack_order: DEPTH_STEPS - rank,
                    period,
                    size_scale: None,
                    offset_percent: None,
                }
            }
            Layer::Creature(index) => {
                let row = match index {
                    2 => Some((2, 0.50, -15.0)),
                    5 => Some((3, 0.40, 15.0)),
                    8 => Some((4, 0.30, 0.0)),
                    _ => None,
                };
                match row {
                    Some((period_step, scale, offset)) => LayerSpec {
                        color: theme.depth_color(index),
                        stack_order: DEPTH_STEPS + 1 - index,
                        period: Some(theme.period(period_step)),
                        size_scale: Some(scale),
                        offset_percent: Some(offset),
                    },
                    None => LayerSpec::fallback(theme),
                }
            }
        }
    }
}

impl LayerSpec {
    /// Styling for indices outside the mapped set: a still panel at the
    /// nearest depth
    fn fallback(theme: &Theme) -> Self {
        Self {
            color: theme.depth_color(1),
            stack_order: DEPTH_STEPS - 1,
            period: None,
            size_scale: None,
            offset_percent: None,
        }
    }

    /// `z-index` value
    pub fn css_z_index(&self) -> String {
        self.stack_order.to_string()
    }

    /// `animation-duration` value, e.g. `"240s"`
    pub fn css_animation_duration(&self) -> Option<String> {
        self.period.map(|p| format!("{}s", p.as_secs()))
    }

    /// `scale` property value, e.g. `"0.4"`
    pub fn css_scale(&self) -> Option<String> {
        self.size_scale.map(|s| format!("{s}"))
    }

    /// `translate` property value, e.g. `"0 -15%"`
    pub fn css_translate(&self) -> Option<String> {
        self.offset_percent.map(|o| format!("0 {o}%"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_terrain_table() {
        let theme = Theme::default();
        // (index, palette slot, stack, period secs)
        let rows = [
            (1, 0, 10, None),
            (2, 2, 8, Some(480)),
            (3, 4, 6, Some(240)),
            (4, 5, 5, Some(120)),
            (5, 7, 3, Some(60)),
            (6, 9, 1, Some(30)),
        ];
        for (index, slot, stack, secs) in rows {
            let spec = Layer::Terrain(index).spec(&theme);
            assert_eq!(spec.color, theme.depth_palette[slot], "terrain {index}");
            assert_eq!(spec.stack_order, stack, "terrain {index}");
            assert_eq!(spec.period.map(|p| p.as_secs()), secs, "terrain {index}");
            assert_eq!(spec.size_scale, None);
            assert_eq!(spec.offset_percent, None);
        }
    }

    #[test]
    fn test_creature_table() {
        let theme = Theme::default();
        // (index, palette slot, stack, period secs, scale, offset)
        let rows = [
            (2, 1, 10, 120, 0.50, -15.0),
            (5, 4, 7, 60, 0.40, 15.0),
            (8, 7, 4, 30, 0.30, 0.0),
        ];
        for (index, slot, stack, secs, scale, offset) in rows {
            let spec = Layer::Creature(index).spec(&theme);
            assert_eq!(spec.color, theme.depth_palette[slot], "creature {index}");
            assert_eq!(spec.stack_order, stack, "creature {index}");
            assert_eq!(spec.period.map(|p| p.as_secs()), Some(secs));
            assert_eq!(spec.size_scale, Some(scale));
            assert_eq!(spec.offset_percent, Some(offset));
        }
    }

    #[test]
    fn test_unknown_index_is_still_and_nearest() {
        let theme = Theme::default();
        for layer in [
            Layer::Terrain(0),
            Layer::Terrain(7),
            Layer::Terrain(99),
            Layer::Terrain(255),
            Layer::Creature(0),
            Layer::Creature(3),
            Layer::Creature(99),
            Layer::Creature(255),
        ] {
            let spec = layer.spec(&theme);
            assert_eq!(spec.color, theme.depth_palette[0], "{layer:?}");
            assert_eq!(spec.stack_order, 10, "{layer:?}");
            assert_eq!(spec.period, None, "{layer:?}");
            assert_eq!(spec.size_scale, None);
            assert_eq!(spec.offset_percent, None);
        }
    }

    #[test]
    fn test_terrain_depth_is_monotonic() {
        let theme = Theme::default();
        for index in 1..6u8 {
            let deeper = Layer::Terrain(index + 1).spec(&theme);
            let nearer = Layer::Terrain(index).spec(&theme);
            assert!(deeper.stack_order < nearer.stack_order);
        }
    }

    #[test]
    fn test_css_values() {
        let theme = Theme::default();
        let spec = Layer::Creature(5).spec(&theme);
        assert_eq!(spec.css_z_index(), "7");
        assert_eq!(spec.css_animation_duration().as_deref(), Some("60s"));
        assert_eq!(spec.css_scale().as_deref(), Some("0.4"));
        assert_eq!(spec.css_translate().as_deref(), Some("0 15%"));

        let still = Layer::Terrain(1).spec(&theme);
        assert_eq!(still.css_animation_duration(), None);
        assert_eq!(still.css_scale(), None);
        assert_eq!(still.css_translate(), None);

        let sunk = Layer::Creature(2).spec(&theme);
        assert_eq!(sunk.css_translate().as_deref(), Some("0 -15%"));
    }

    proptest! {
        /// The mapping never panics, always lands inside the theme, and is pure
        #[test]
        fn test_spec_total_over_all_indices(index in any::<u8>(), creature in any::<bool>()) {
            let theme = Theme::default();
            let layer = if creature { Layer::Creature(index) } else { Layer::Terrain(index) };
            let spec = layer.spec(&theme);
            prop_assert!((1..=10).contains(&spec.stack_order));
            prop_assert!(theme.depth_palette.contains(&spec.color));
            if let Some(period) = spec.period {
                prop_assert!(theme.period_secs.contains(&(period.as_secs() as u32)));
            }
            prop_assert_eq!(layer.spec(&theme), spec);
        }
    }
}
