//! Daily and weekly turning-point ("P1"/"P2") detection over hourly OHLC candles, occurrence
//! statistics per hour and weekday, and heatmap colors for displaying them.
//!
//! Everything here is pure and deterministic: no I/O, no clock reads. The current hour or
//! weekday is always passed in explicitly.

#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{
    PivotRank, adjust_for_current_day, adjust_for_current_week, calculate_daily_pivots,
    calculate_hourly_stats, calculate_weekday_stats, calculate_weekly_pivots, most_likely_bucket,
};
pub use domain::{DailyPivot, HourlyCandle, PivotType, RawKline, WeeklyPivot, normalize_klines};
pub use models::BucketStats;
pub use ui::{ColorScheme, Rgb, TextTone, color_for, text_color_for};
