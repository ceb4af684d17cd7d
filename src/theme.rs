//! Site theme: the immutable palette/period configuration
//!
//! Built once at startup and passed by reference into the layer mapping and
//! the shape field. Hosts can override any part of it through a JSON blob
//! embedded in the page; everything missing falls back to the defaults below.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::color::Color;
use crate::consts::{DEPTH_STEPS, PERIOD_STEPS, SHAPE_COLORS};

/// Immutable visual configuration shared by every backdrop component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Depth scale, ordered dark (rank 1, nearest) to light (rank 11, farthest)
    pub depth_palette: [Color; DEPTH_STEPS as usize],
    /// Fill colors for the drifting shapes
    pub shape_palette: [Color; SHAPE_COLORS],
    /// Drift period ladder in seconds; each step halves the previous
    pub period_secs: [u32; PERIOD_STEPS],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            depth_palette: [
                Color::rgb(0x0b, 0x1a, 0x26),
                Color::rgb(0x12, 0x2b, 0x3b),
                Color::rgb(0x1a, 0x3c, 0x50),
                Color::rgb(0x23, 0x4e, 0x64),
                Color::rgb(0x2d, 0x60, 0x78),
                Color::rgb(0x38, 0x72, 0x8c),
                Color::rgb(0x45, 0x85, 0x9f),
                Color::rgb(0x54, 0x97, 0xb1),
                Color::rgb(0x66, 0xaa, 0xc2),
                Color::rgb(0x7c, 0xbc, 0xd2),
                Color::rgb(0x95, 0xcf, 0xe1),
            ],
            // Mid-ladder picks so the shapes read as tonal variants of the scene
            shape_palette: [
                Color::rgb(0x23, 0x4e, 0x64),
                Color::rgb(0x38, 0x72, 0x8c),
                Color::rgb(0x66, 0xaa, 0xc2),
            ],
            period_secs: [480, 240, 120, 60, 30],
        }
    }
}

impl Theme {
    /// Parse a theme override; fields absent from the JSON keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Color for a 1-based depth rank; out-of-scale ranks clamp to the ends
    pub fn depth_color(&self, rank: u8) -> Color {
        let rank = rank.clamp(1, DEPTH_STEPS);
        self.depth_palette[(rank - 1) as usize]
    }

    /// Period at a ladder step (0 = slowest); steps past the end clamp
    pub fn period(&self, step: usize) -> Duration {
        let step = step.min(PERIOD_STEPS - 1);
        Duration::from_secs(u64::from(self.period_secs[step]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brightness(color: Color) -> u32 {
        u32::from(color.r) + u32::from(color.g) + u32::from(color.b)
    }

    #[test]
    fn test_depth_palette_runs_dark_to_light() {
        let theme = Theme::default();
        for pair in theme.depth_palette.windows(2) {
            assert!(brightness(pair[0]) < brightness(pair[1]));
        }
    }

    #[test]
    fn test_period_ladder_halves() {
        let theme = Theme::default();
        for pair in theme.period_secs.windows(2) {
            assert_eq!(pair[1], pair[0] / 2);
        }
        assert_eq!(theme.period(0), Duration::from_secs(480));
        assert_eq!(theme.period(4), Duration::from_secs(30));
        // Steps past the ladder clamp to the fastest period
        assert_eq!(theme.period(99), Duration::from_secs(30));
    }

    #[test]
    fn test_depth_color_clamps_rank() {
        let theme = Theme::default();
        assert_eq!(theme.depth_color(0), theme.depth_palette[0]);
        assert_eq!(theme.depth_color(1), theme.depth_palette[0]);
        assert_eq!(theme.depth_color(11), theme.depth_palette[10]);
        assert_eq!(theme.depth_color(200), theme.depth_palette[10]);
    }

    #[test]
    fn test_partial_json_override() {
        let theme =
            Theme::from_json(r##"{"shape_palette": ["#ff0000", "#00ff00", "#0000ff"]}"##).unwrap();
        assert_eq!(theme.shape_palette[0], Color::rgb(0xff, 0, 0));
        // Untouched sections keep their defaults
        assert_eq!(theme.depth_palette, Theme::default().depth_palette);
        assert_eq!(theme.period_secs, Theme::default().period_secs);

        assert!(Theme::from_json("{not json").is_err());
    }
}
