//! Configuration module for the pivot-clock library.

// Can all be private because we have a public re-export.
mod analysis;
mod debug;
mod heatmap;

// Re-export commonly used items
pub use analysis::{PIVOTS, PivotConfig};
pub use debug::{DF, LogFlags};
pub use heatmap::{HEATMAP, HeatmapConfig};
