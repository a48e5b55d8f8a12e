//! Pivot detection configuration

use serde::{Deserialize, Serialize};

use crate::utils::TimeUtils;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PivotConfig {
    /// Provider timestamps with a magnitude below this are taken to be in seconds.
    /// 1e11 seconds is year 5138, 1e11 ms is March 1973, so the ranges never overlap for real data.
    pub seconds_timestamp_cutoff: i64,
    /// Expected spacing of the candles fed to the daily detector.
    pub candle_interval_ms: i64,
}

pub const PIVOTS: PivotConfig = PivotConfig {
    seconds_timestamp_cutoff: 100_000_000_000,
    candle_interval_ms: TimeUtils::MS_IN_H,
};
