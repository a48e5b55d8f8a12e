use {
    colorgrad::{Gradient, LinearGradient},
    serde::{Deserialize, Serialize},
    std::sync::LazyLock,
    strum::IntoEnumIterator,
    strum_macros::{Display, EnumIter},
};

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::{
    config::HEATMAP,
    utils::{clamp_pct, remap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Perceptual luminance in 0.0..=1.0
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Text drawn on top of a heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum TextTone {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter)]
pub enum ColorScheme {
    #[default]
    Custom,
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
}

impl ColorScheme {
    /// Evenly spaced gradient stops from 0.0 to 1.0. None for the custom ramp.
    pub fn control_points(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Custom => None,
            Self::Viridis => Some(&[
                "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779",
                "#6ece58", "#b5de2b", "#fde725",
            ]),
            Self::Plasma => Some(&[
                "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953",
                "#fb9f3a", "#fdca26", "#f0f921",
            ]),
            Self::Inferno => Some(&[
                "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60", "#cf4446", "#ed6925",
                "#fb9b06", "#f7d13d", "#fcffa4",
            ]),
            Self::Magma => Some(&[
                "#000004", "#180f3d", "#440f76", "#721f81", "#9e2f7f", "#cd4071", "#f1605d",
                "#fd9668", "#feca8d", "#fcfdbf",
            ]),
            Self::Cividis => Some(&[
                "#00224e", "#123570", "#3b496c", "#575d6d", "#707173", "#8a8678", "#a59c74",
                "#c3b369", "#e1cc55", "#fee838",
            ]),
        }
    }
}

// One gradient per scheme, indexed by discriminant. None for the custom ramp or a failed build.
static SCHEME_GRADIENTS: LazyLock<Vec<Option<LinearGradient>>> = LazyLock::new(|| {
    ColorScheme::iter()
        .map(|scheme| scheme.control_points().and_then(build_gradient))
        .collect()
});

impl ColorScheme {
    /// Built once per process and shared by every `color_for` call.
    pub(crate) fn gradient(&self) -> Option<&'static LinearGradient> {
        SCHEME_GRADIENTS.get(*self as usize)?.as_ref()
    }
}

/// Background for cells with no probability mass.
pub fn neutral_color(dark_mode: bool) -> Rgb {
    if dark_mode { HEATMAP.neutral_dark } else { HEATMAP.neutral_light }
}

/// Heatmap cell color for a probability in percent. Out-of-range input is clamped to 0-100;
/// zero (and NaN) gives the neutral color, which no positive probability ever maps to.
/// `intensity_exponent` reshapes the scale as `fraction ^ (1 / exponent)`; non-positive or
/// non-finite exponents fall back to the configured default.
pub fn color_for(probability: f64, dark_mode: bool, scheme: ColorScheme, intensity_exponent: f64) -> Rgb {
    let pct = clamp_pct(probability);
    let neutral = neutral_color(dark_mode);
    if pct == 0.0 {
        return neutral;
    }

    let exponent = if intensity_exponent.is_finite() && intensity_exponent > 0.0 {
        intensity_exponent
    } else {
        HEATMAP.default_intensity_exponent
    };
    let fraction = (pct / 100.0).powf(1.0 / exponent);

    let color = match scheme.gradient() {
        Some(gradient) => gradient_color(gradient, fraction),
        None => custom_ramp(fraction, dark_mode),
    };

    // Keep the sentinel unambiguous
    if color == neutral { Rgb::new(color.r, color.g, color.b ^ 1) } else { color }
}

/// Dark text on light cells, light text on dark ones.
pub fn text_color_for(rgb: Rgb) -> TextTone {
    if rgb.luminance() > HEATMAP.text_luminance_threshold {
        TextTone::Dark
    } else {
        TextTone::Light
    }
}

fn build_gradient(stops: &'static [&'static str]) -> Option<LinearGradient> {
    match colorgrad::GradientBuilder::new()
        .html_colors(stops)
        .build::<LinearGradient>()
    {
        Ok(gradient) => Some(gradient),
        Err(e) => {
            log::error!("Failed to build heatmap gradient from {:?}: {}", stops, e);
            None
        }
    }
}

fn gradient_color(gradient: &LinearGradient, fraction: f64) -> Rgb {
    let rgba = gradient.at(fraction as f32).to_rgba8();

    #[cfg(debug_assertions)]
    if DF.log_colors {
        log::debug!("Gradient at {:.3} -> {:?}", fraction, rgba);
    }

    Rgb::new(rgba[0], rgba[1], rgba[2])
}

// Red and green ramp, blue held at the start color
fn custom_ramp(fraction: f64, dark_mode: bool) -> Rgb {
    let (from, to) = if dark_mode {
        (HEATMAP.custom_dark_from, HEATMAP.custom_dark_to)
    } else {
        (HEATMAP.custom_light_from, HEATMAP.custom_light_to)
    };
    let channel = |a: u8, b: u8| remap(fraction, 0.0, 1.0, a as f64, b as f64).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(from.r, to.r), channel(from.g, to.g), from.b)
}
