// Presentation helpers for the rendering layer. Pure functions, no drawing.
mod heatmap;

pub use heatmap::{ColorScheme, Rgb, TextTone, color_for, neutral_color, text_color_for};
