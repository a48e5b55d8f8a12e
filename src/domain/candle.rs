use serde::{Deserialize, Serialize};

use crate::utils::hour_of_day_from_ms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One UTC hour of OHLC prices. `hour_of_day` is derived from the timestamp, so the
/// fields stay private and the struct is immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyCandle {
    timestamp_ms: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    hour_of_day: u32,
}

impl HourlyCandle {
    pub fn new(timestamp_ms: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        HourlyCandle {
            timestamp_ms,
            open,
            high,
            low,
            close,
            hour_of_day: hour_of_day_from_ms(timestamp_ms),
        }
    }

    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }
    pub fn open(&self) -> f64 {
        self.open
    }
    pub fn high(&self) -> f64 {
        self.high
    }
    pub fn low(&self) -> f64 {
        self.low
    }
    pub fn close(&self) -> f64 {
        self.close
    }
    pub fn hour_of_day(&self) -> u32 {
        self.hour_of_day
    }

    /// False if any of the four prices is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.open.is_finite() && self.high.is_finite() && self.low.is_finite() && self.close.is_finite()
    }

    // A flat candle (close == open) counts as bullish
    pub fn get_type(&self) -> CandleType {
        if self.close >= self.open {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }
}
