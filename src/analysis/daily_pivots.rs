use {chrono::NaiveDate, itertools::Itertools};

#[cfg(debug_assertions)]
use crate::config::{DF, PIVOTS};

use crate::{
    domain::{CandleType, DailyPivot, HourlyCandle, PivotType},
    utils::{day_of_week, get_max, get_min, utc_date_from_ms},
};

#[cfg(any(debug_assertions, test))]
use crate::utils::TimeUtils;

/// Decides which extreme came first when a day's high and low are both first touched inside
/// the same candle. OHLC alone cannot see inside the hour, so this is a heuristic: a bullish
/// candle had to visit its low before rallying to close higher, a bearish one the reverse.
/// Swap it out via `calculate_daily_pivots_with` when finer-grained data is available.
pub fn candle_direction_order(candle: &HourlyCandle) -> PivotType {
    match candle.get_type() {
        CandleType::Bullish => PivotType::Low,
        CandleType::Bearish => PivotType::High,
    }
}

/// One pivot per UTC calendar day that has at least one usable candle, ascending by date.
pub fn calculate_daily_pivots(candles: &[HourlyCandle]) -> Vec<DailyPivot> {
    calculate_daily_pivots_with(candles, candle_direction_order)
}

/// As `calculate_daily_pivots`, with a custom resolver for same-candle high/low ties.
pub fn calculate_daily_pivots_with<F>(candles: &[HourlyCandle], same_candle_order: F) -> Vec<DailyPivot>
where
    F: Fn(&HourlyCandle) -> PivotType,
{
    let mut dropped = 0usize;
    let dated: Vec<(NaiveDate, HourlyCandle)> = candles
        .iter()
        .filter_map(|candle| {
            // Malformed candles are treated as absent
            let date = match utc_date_from_ms(candle.timestamp_ms()) {
                Some(date) if candle.is_finite() => date,
                _ => {
                    dropped += 1;
                    #[cfg(debug_assertions)]
                    if DF.log_dropped_candles {
                        log::warn!("Ignoring malformed candle at {}ms: {:?}", candle.timestamp_ms(), candle);
                    }
                    return None;
                }
            };
            Some((date, *candle))
        })
        .collect();

    // Stable sort, so duplicate timestamps keep their input order
    let by_day = dated
        .into_iter()
        .sorted_by_key(|(date, candle)| (*date, candle.timestamp_ms()))
        .chunk_by(|(date, _)| *date);

    #[cfg(debug_assertions)]
    let expected = (TimeUtils::MS_IN_D / PIVOTS.candle_interval_ms) as usize;
    #[cfg(debug_assertions)]
    let mut short_days = 0usize;

    let mut pivots = Vec::new();
    for (date, chunk) in &by_day {
        let day: Vec<HourlyCandle> = chunk.map(|(_, candle)| candle).collect();
        #[cfg(debug_assertions)]
        if day.len() < expected {
            short_days += 1;
        }
        if let Some(pivot) = pivot_for_day(date, &day, &same_candle_order) {
            pivots.push(pivot);
        }
    }

    if dropped > 0 {
        log::warn!("Daily pivots: dropped {} malformed candles of {}", dropped, candles.len());
    }

    #[cfg(debug_assertions)]
    if DF.log_pivots {
        log::info!(
            "Daily pivots: {} days from {} candles ({} days with fewer than {} candles)",
            pivots.len(),
            candles.len(),
            short_days,
            expected
        );
    }

    pivots
}

/// `day` must be non-empty, finite, and sorted by timestamp.
fn pivot_for_day<F>(date: NaiveDate, day: &[HourlyCandle], same_candle_order: &F) -> Option<DailyPivot>
where
    F: Fn(&HourlyCandle) -> PivotType,
{
    let first = day.first()?;

    let highs: Vec<f64> = day.iter().map(|c| c.high()).collect();
    let lows: Vec<f64> = day.iter().map(|c| c.low()).collect();
    let daily_high = get_max(&highs);
    let daily_low = get_min(&lows);

    // First-touch scan, stopping once both extremes are seen
    let mut high_idx = None;
    let mut low_idx = None;
    for (i, candle) in day.iter().enumerate() {
        if high_idx.is_none() && candle.high() >= daily_high {
            high_idx = Some(i);
        }
        if low_idx.is_none() && candle.low() <= daily_low {
            low_idx = Some(i);
        }
        if high_idx.is_some() && low_idx.is_some() {
            break;
        }
    }
    let (high_idx, low_idx) = (high_idx?, low_idx?);

    let p1_type = if high_idx < low_idx {
        PivotType::High
    } else if low_idx < high_idx {
        PivotType::Low
    } else {
        same_candle_order(&day[high_idx])
    };

    let high_hour = day[high_idx].hour_of_day();
    let low_hour = day[low_idx].hour_of_day();
    let (p1_hour, p1_price, p2_hour, p2_price) = match p1_type {
        PivotType::High => (high_hour, daily_high, low_hour, daily_low),
        PivotType::Low => (low_hour, daily_low, high_hour, daily_high),
    };

    Some(DailyPivot {
        date,
        day_of_week: day_of_week(date),
        daily_open: first.open(),
        daily_high,
        daily_low,
        high_hour,
        low_hour,
        p1_type,
        p1_hour,
        p1_price,
        p2_type: p1_type.complement(),
        p2_hour,
        p2_price,
    })
}
