//! Heatmap visualization configuration

use serde::{Deserialize, Serialize};

use crate::ui::Rgb;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapConfig {
    /// "No data" cell in dark mode. Never produced for a non-zero probability.
    pub neutral_dark: Rgb,
    /// "No data" cell in light mode.
    pub neutral_light: Rgb,

    /// Applied as `fraction ^ (1 / exponent)`. > 1 lifts faint cells, < 1 compresses them.
    pub default_intensity_exponent: f64,

    // Custom two-channel ramp (red and green move, blue stays put)
    pub custom_dark_from: Rgb,
    pub custom_dark_to: Rgb,
    pub custom_light_from: Rgb,
    pub custom_light_to: Rgb,

    /// Perceptual luminance above which text on a cell is drawn dark.
    pub text_luminance_threshold: f64,
}

pub const HEATMAP: HeatmapConfig = HeatmapConfig {
    neutral_dark: Rgb::new(31, 41, 55),
    neutral_light: Rgb::new(243, 244, 246),

    default_intensity_exponent: 1.0,

    custom_dark_from: Rgb::new(40, 40, 60),
    custom_dark_to: Rgb::new(255, 160, 60),
    custom_light_from: Rgb::new(255, 245, 235),
    custom_light_to: Rgb::new(200, 40, 235),

    text_luminance_threshold: 0.5,
};
