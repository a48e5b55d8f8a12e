use {
    anyhow::{Context, Result, bail},
    serde_json::Value,
    std::{convert::TryFrom, error::Error, fmt},
};

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::{
    config::PIVOTS,
    domain::HourlyCandle,
    utils::utc_date_from_ms,
};

/// A provider kline as it arrives on the wire: `[open_time, "open", "high", "low", "close", ...]`.
/// Prices that are missing or fail to parse are kept as `None` and become NaN in the candle,
/// which the pivot detectors then skip.
#[derive(Debug, Clone, PartialEq)]
pub struct RawKline {
    pub open_time: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
}

#[derive(Debug)]
pub enum RawKlineError {
    InvalidLength(usize),
    InvalidType(String),
}

impl fmt::Display for RawKlineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::fmt::Result {
        match self {
            RawKlineError::InvalidLength(len) => write!(f, "Invalid length: {} fields", len),
            RawKlineError::InvalidType(field) => write!(f, "Invalid type: {}", field),
        }
    }
}

impl Error for RawKlineError {}

fn value_to_price(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

impl TryFrom<Vec<Value>> for RawKline {
    type Error = RawKlineError;

    fn try_from(row: Vec<Value>) -> Result<Self, Self::Error> {
        if row.len() < 5 {
            return Err(RawKlineError::InvalidLength(row.len()));
        }

        let open_time = match &row[0] {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| RawKlineError::InvalidType("open_time".to_string()))?,
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| RawKlineError::InvalidType("open_time".to_string()))?,
            _ => return Err(RawKlineError::InvalidType("open_time".to_string())),
        };

        Ok(RawKline {
            open_time,
            open: value_to_price(row.get(1)),
            high: value_to_price(row.get(2)),
            low: value_to_price(row.get(3)),
            close: value_to_price(row.get(4)),
        })
    }
}

/// Scales second-resolution provider timestamps up to milliseconds.
pub fn normalize_timestamp_ms(raw: i64) -> Option<i64> {
    if raw.unsigned_abs() < PIVOTS.seconds_timestamp_cutoff as u64 {
        raw.checked_mul(1000)
    } else {
        Some(raw)
    }
}

impl RawKline {
    pub fn into_candle(self) -> Result<HourlyCandle> {
        let Some(timestamp_ms) = normalize_timestamp_ms(self.open_time) else {
            bail!("Timestamp {} overflows when scaled to milliseconds", self.open_time);
        };
        if utc_date_from_ms(timestamp_ms).is_none() {
            bail!("Timestamp {}ms is outside the representable UTC calendar", timestamp_ms);
        }

        Ok(HourlyCandle::new(
            timestamp_ms,
            self.open.unwrap_or(f64::NAN),
            self.high.unwrap_or(f64::NAN),
            self.low.unwrap_or(f64::NAN),
            self.close.unwrap_or(f64::NAN),
        ))
    }
}

/// Parses a JSON array of kline rows. Rows with an unusable shape are skipped; a document
/// that is not an array of arrays is an error.
pub fn parse_kline_rows(json: &str) -> Result<Vec<RawKline>> {
    let rows: Vec<Vec<Value>> =
        serde_json::from_str(json).context("Kline payload is not an array of arrays")?;

    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| match RawKline::try_from(row) {
            Ok(kline) => Some(kline),
            Err(e) => {
                log::warn!("Skipping kline row {}: {}", i, e);
                None
            }
        })
        .collect())
}

/// Converts a batch of provider klines into candles, dropping the ones with unusable timestamps.
pub fn normalize_klines(klines: Vec<RawKline>) -> Vec<HourlyCandle> {
    let total = klines.len();
    let candles: Vec<HourlyCandle> = klines
        .into_iter()
        .filter_map(|k| match k.into_candle() {
            Ok(candle) => Some(candle),
            Err(_e) => {
                #[cfg(debug_assertions)]
                if DF.log_dropped_candles {
                    log::warn!("Dropping kline: {:#}", _e);
                }
                None
            }
        })
        .collect();

    if candles.len() < total {
        log::info!("Normalized {} of {} klines", candles.len(), total);
    }
    candles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    #[test]
    fn parses_binance_style_rows() {
        let json = r#"[
            [1704067200000, "100.5", "101.0", "99.5", "100.0", "12.3", 1704070799999],
            [1704070800, 100.0, 102.0, 99.0, 101.0]
        ]"#;
        let klines = parse_kline_rows(json).unwrap();
        assert_eq!(klines.len(), 2);
        assert_eq!(klines[0].open, Some(100.5));
        assert_eq!(klines[1].high, Some(102.0));

        let candles = normalize_klines(klines);
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].timestamp_ms(), 1_704_067_200_000);
        // Second row was in seconds
        assert_eq!(candles[1].timestamp_ms(), 1_704_070_800_000);
        assert_eq!(candles[1].hour_of_day(), 1);
    }

    #[test]
    fn short_rows_are_skipped_and_bad_documents_error() {
        let klines = parse_kline_rows(r#"[[1704067200000, "1", "2"], [1704067200000, "1", "2", "0.5", "1.5"]]"#).unwrap();
        assert_eq!(klines.len(), 1);
        assert!(parse_kline_rows(r#"{"not": "rows"}"#).is_err());
    }

    #[test]
    fn missing_prices_become_nan() {
        let kline = RawKline::try_from(vec![
            Value::from(TimeUtils::MS_IN_D),
            Value::from("oops"),
            Value::Null,
            Value::from("1.0"),
            Value::from("1.5"),
        ])
        .unwrap();
        let candle = kline.into_candle().unwrap();
        assert!(!candle.is_finite());
        assert_eq!(candle.low(), 1.0);
    }

    #[test]
    fn batch_keeps_good_klines_around_a_bad_one() {
        let good = |open_time| RawKline { open_time, open: Some(1.0), high: Some(2.0), low: Some(0.5), close: Some(1.5) };
        let bad = RawKline { open_time: i64::MAX, ..good(0) };
        let candles = normalize_klines(vec![good(1_704_067_200_000), bad, good(1_704_070_800_000)]);
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].hour_of_day(), 1);
    }

    #[test]
    fn unrepresentable_timestamps_fail() {
        let kline = RawKline { open_time: i64::MAX, open: Some(1.0), high: Some(1.0), low: Some(1.0), close: Some(1.0) };
        assert!(kline.into_candle().is_err());
        assert_eq!(normalize_timestamp_ms(1_704_067_200), Some(1_704_067_200_000));
        assert_eq!(normalize_timestamp_ms(1_704_067_200_000), Some(1_704_067_200_000));
    }
}
