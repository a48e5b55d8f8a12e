//! Debugging feature flags.

pub struct LogFlags {
    /// Per-call summary of daily and weekly pivot detection.
    pub log_pivots: bool,
    /// Emit each malformed candle dropped during detection.
    pub log_dropped_candles: bool,
    /// Occurrence statistics and forward adjustment.
    pub log_stats: bool,
    /// Gradient construction for heatmap schemes.
    pub log_colors: bool,
}

pub const DF: LogFlags = LogFlags {
    log_pivots: false,
    log_dropped_candles: true,
    log_stats: false,
    log_colors: false,
};
