use {
    chrono::{Datelike, Days, NaiveDate},
    itertools::Itertools,
};

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::{
    domain::{DailyPivot, PivotType, WeeklyPivot},
    utils::week_start_monday,
};

/// Rolls daily pivots up into ISO weeks (Monday to Sunday), ascending by week start.
/// Only weeks with at least one daily pivot are produced.
pub fn calculate_weekly_pivots(daily: &[DailyPivot]) -> Vec<WeeklyPivot> {
    let by_week = daily
        .iter()
        .filter_map(|p| week_start_monday(p.date, p.day_of_week).map(|start| (start, p)))
        .sorted_by_key(|(start, p)| (*start, p.date))
        .chunk_by(|(start, _)| *start);

    let mut weeks = Vec::new();
    for (week_start, chunk) in &by_week {
        let days: Vec<&DailyPivot> = chunk.map(|(_, p)| p).collect();
        if let Some(week) = pivot_for_week(week_start, &days) {
            weeks.push(week);
        }
    }

    #[cfg(debug_assertions)]
    if DF.log_pivots {
        log::info!("Weekly pivots: {} weeks from {} days", weeks.len(), daily.len());
    }

    weeks
}

/// `days` must be non-empty and sorted by date.
fn pivot_for_week(week_start: NaiveDate, days: &[&DailyPivot]) -> Option<WeeklyPivot> {
    let first = days.first()?;
    let week_end = week_start.checked_add_days(Days::new(6))?;

    let weekly_high = days.iter().map(|d| d.daily_high).fold(f64::NEG_INFINITY, f64::max);
    let weekly_low = days.iter().map(|d| d.daily_low).fold(f64::INFINITY, f64::min);

    let high_pos = days.iter().position(|d| d.daily_high == weekly_high)?;
    let low_pos = days.iter().position(|d| d.daily_low == weekly_low)?;

    // Dates are distinct, so only a shared day needs resolving, and that day already knows
    let p1_type = if high_pos < low_pos {
        PivotType::High
    } else if low_pos < high_pos {
        PivotType::Low
    } else {
        days[high_pos].p1_type
    };

    let high_day = days[high_pos].day_of_week;
    let low_day = days[low_pos].day_of_week;
    let (p1_day, p1_price, p2_day, p2_price) = match p1_type {
        PivotType::High => (high_day, weekly_high, low_day, weekly_low),
        PivotType::Low => (low_day, weekly_low, high_day, weekly_high),
    };

    let iso = week_start.iso_week();

    Some(WeeklyPivot {
        week_start,
        week_end,
        iso_week_number: iso.week(),
        iso_year: iso.year(),
        weekly_open: first.daily_open,
        weekly_high,
        weekly_low,
        high_day,
        low_day,
        p1_type,
        p1_day,
        p1_price,
        p2_type: p1_type.complement(),
        p2_day,
        p2_price,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::day_of_week;

    pub(crate) fn daily(ymd: (i32, u32, u32), high: f64, low: f64, p1: PivotType, p1_hour: u32) -> DailyPivot {
        let date = NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap();
        let (p1_price, p2_price) = match p1 {
            PivotType::High => (high, low),
            PivotType::Low => (low, high),
        };
        DailyPivot {
            date,
            day_of_week: day_of_week(date),
            daily_open: (high + low) / 2.0,
            daily_high: high,
            daily_low: low,
            high_hour: if p1 == PivotType::High { p1_hour } else { 23 },
            low_hour: if p1 == PivotType::Low { p1_hour } else { 23 },
            p1_type: p1,
            p1_hour,
            p1_price,
            p2_type: p1.complement(),
            p2_hour: 23,
            p2_price,
        }
    }

    #[test]
    fn monday_to_sunday_share_one_week() {
        let days: Vec<DailyPivot> = (1..=7)
            .map(|d| daily((2024, 1, d), 100.0 + d as f64, 90.0 - d as f64, PivotType::High, 1))
            .collect();
        let weeks = calculate_weekly_pivots(&days);
        assert_eq!(weeks.len(), 1);
        let w = &weeks[0];
        assert_eq!(w.week_start_key(), "2024-01-01");
        assert_eq!(w.week_end_key(), "2024-01-07");
        assert_eq!((w.iso_year, w.iso_week_number), (2024, 1));
        // Both extremes land on Sunday, whose own pivot says high first
        assert_eq!((w.high_day, w.low_day), (0, 0));
        assert_eq!((w.p1_type, w.p1_day, w.p1_price), (PivotType::High, 0, 107.0));
        assert_eq!(w.p2_price, 83.0);
        assert_eq!(w.weekly_open, days[0].daily_open);
    }

    #[test]
    fn extremes_on_different_days_order_by_date() {
        let days = vec![
            daily((2024, 1, 10), 105.0, 95.0, PivotType::High, 3), // Wed
            daily((2024, 1, 8), 101.0, 90.0, PivotType::Low, 2),   // Mon
            daily((2024, 1, 12), 110.0, 96.0, PivotType::Low, 4),  // Fri
        ];
        let w = &calculate_weekly_pivots(&days)[0];
        assert_eq!(w.week_start_key(), "2024-01-08");
        assert_eq!((w.low_day, w.high_day), (1, 5));
        assert_eq!((w.p1_type, w.p1_day, w.p1_price), (PivotType::Low, 1, 90.0));
        assert_eq!((w.p2_type, w.p2_day, w.p2_price), (PivotType::High, 5, 110.0));
        assert_eq!(w.weekly_open, days[1].daily_open);
    }

    #[test]
    fn sunday_belongs_to_previous_monday_and_iso_year_rolls() {
        let days = vec![
            daily((2024, 12, 29), 10.0, 9.0, PivotType::Low, 0), // Sun, ISO week 52 of 2024
            daily((2024, 12, 30), 10.0, 9.0, PivotType::Low, 0), // Mon, ISO week 1 of 2025
            daily((2024, 12, 23), 10.0, 9.0, PivotType::Low, 0),
        ];
        let weeks = calculate_weekly_pivots(&days);
        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start_key(), "2024-12-23");
        assert_eq!(weeks[0].week_end_key(), "2024-12-29");
        assert_eq!((weeks[0].iso_year, weeks[0].iso_week_number), (2024, 52));
        // First day with the weekly extreme wins
        assert_eq!(weeks[0].low_day, 1);
        assert_eq!(weeks[1].week_start_key(), "2024-12-30");
        assert_eq!((weeks[1].iso_year, weeks[1].iso_week_number), (2025, 1));
    }

    #[test]
    fn empty_input_gives_no_weeks() {
        assert!(calculate_weekly_pivots(&[]).is_empty());
    }

    #[test]
    fn weekly_pivots_are_complementary() {
        let days: Vec<DailyPivot> = (1..=31)
            .map(|d| {
                let high = 100.0 + ((d * 7) % 13) as f64;
                let low = 90.0 - ((d * 5) % 11) as f64;
                let p1 = if d % 2 == 0 { PivotType::High } else { PivotType::Low };
                daily((2024, 1, d), high, low, p1, d % 24)
            })
            .collect();
        let weeks = calculate_weekly_pivots(&days);
        assert_eq!(weeks.len(), 5);
        assert!(weeks.windows(2).all(|w| w[0].week_start < w[1].week_start));
        for w in &weeks {
            assert_ne!(w.p1_type, w.p2_type);
            let mut prices = [w.p1_price, w.p2_price];
            prices.sort_by(f64::total_cmp);
            assert_eq!(prices, [w.weekly_low, w.weekly_high]);
        }
        assert_eq!(weeks, calculate_weekly_pivots(&days));
    }
}
