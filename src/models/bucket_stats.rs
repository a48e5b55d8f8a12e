use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

use crate::{
    domain::{DailyPivot, WeeklyPivot},
    utils::TimeUtils,
};

/// Occurrence statistics for one hour-of-day or day-of-week slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketStats {
    pub bucket_index: usize,
    pub p1_count: usize,
    pub p2_count: usize,
    pub total_samples: usize,
    /// Percent, 0-100
    pub p1_probability: f64,
    pub p2_probability: f64,
    /// Periods (days or weeks) since P1 last fell in this bucket. None if never.
    pub last_p1_ago: Option<i64>,
    pub last_p2_ago: Option<i64>,
}

impl BucketStats {
    pub(crate) fn empty(bucket_index: usize) -> Self {
        BucketStats {
            bucket_index,
            p1_count: 0,
            p2_count: 0,
            total_samples: 0,
            p1_probability: 0.0,
            p2_probability: 0.0,
            last_p1_ago: None,
            last_p2_ago: None,
        }
    }
}

/// A period whose two pivots are bucketed by the statistics aggregator.
pub trait PivotPeriod {
    /// Number of buckets in the cycle (24 hours, 7 weekdays).
    const BUCKETS: usize;
    /// Length of one period in days, for the "periods ago" measure.
    const PERIOD_DAYS: i64;

    /// Anchor date of the period (the day itself, or the week's Monday).
    fn anchor_date(&self) -> NaiveDate;
    fn p1_bucket(&self) -> usize;
    fn p2_bucket(&self) -> usize;
    /// Value tested against an inclusion filter. None means the period is never filtered out.
    fn filter_key(&self) -> Option<u32>;
}

impl PivotPeriod for DailyPivot {
    const BUCKETS: usize = TimeUtils::HOURS_IN_D as usize;
    const PERIOD_DAYS: i64 = 1;

    fn anchor_date(&self) -> NaiveDate {
        self.date
    }
    fn p1_bucket(&self) -> usize {
        self.p1_hour as usize
    }
    fn p2_bucket(&self) -> usize {
        self.p2_hour as usize
    }
    fn filter_key(&self) -> Option<u32> {
        Some(self.day_of_week)
    }
}

// Weeks have no sub-value worth filtering on
impl PivotPeriod for WeeklyPivot {
    const BUCKETS: usize = TimeUtils::DAYS_IN_W as usize;
    const PERIOD_DAYS: i64 = TimeUtils::DAYS_IN_W as i64;

    fn anchor_date(&self) -> NaiveDate {
        self.week_start
    }
    fn p1_bucket(&self) -> usize {
        self.p1_day as usize
    }
    fn p2_bucket(&self) -> usize {
        self.p2_day as usize
    }
    fn filter_key(&self) -> Option<u32> {
        None
    }
}
