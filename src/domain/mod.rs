// Domain types and value objects
mod candle;
mod pivot;
mod raw_kline;

// Re-export commonly used types to the world
pub use candle::{CandleType, HourlyCandle};
pub use pivot::{DailyPivot, PivotType, WeeklyPivot};
pub use raw_kline::{
    RawKline, RawKlineError, normalize_klines, normalize_timestamp_ms, parse_kline_rows,
};
