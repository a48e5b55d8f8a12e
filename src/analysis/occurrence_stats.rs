use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::{
    domain::{DailyPivot, WeeklyPivot},
    models::{BucketStats, PivotPeriod},
    utils::percentage,
};

/// First or second pivot of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum PivotRank {
    P1,
    P2,
}

/// Per-bucket P1/P2 occurrence counts over `periods`. Always returns exactly `P::BUCKETS`
/// records. `filter` keeps only periods whose filter key is listed; `None` or an empty
/// slice keeps everything.
pub fn calculate_bucket_stats<P: PivotPeriod>(periods: &[P], filter: Option<&[u32]>) -> Vec<BucketStats> {
    let included: Vec<&P> = match filter {
        Some(allowed) if !allowed.is_empty() => periods
            .iter()
            .filter(|p| p.filter_key().is_none_or(|key| allowed.contains(&key)))
            .collect(),
        _ => periods.iter().collect(),
    };

    let mut stats: Vec<BucketStats> = (0..P::BUCKETS).map(BucketStats::empty).collect();
    let total_samples = included.len();
    let Some(latest) = included.iter().map(|p| p.anchor_date()).max() else {
        return stats;
    };

    let mut last_p1: Vec<Option<NaiveDate>> = vec![None; P::BUCKETS];
    let mut last_p2: Vec<Option<NaiveDate>> = vec![None; P::BUCKETS];

    for period in &included {
        let date = period.anchor_date();
        match stats.get_mut(period.p1_bucket()) {
            Some(bucket) => {
                bucket.p1_count += 1;
                last_p1[bucket.bucket_index] = last_p1[bucket.bucket_index].max(Some(date));
            }
            None => log::warn!("P1 bucket {} out of range (0..{})", period.p1_bucket(), P::BUCKETS),
        }
        match stats.get_mut(period.p2_bucket()) {
            Some(bucket) => {
                bucket.p2_count += 1;
                last_p2[bucket.bucket_index] = last_p2[bucket.bucket_index].max(Some(date));
            }
            None => log::warn!("P2 bucket {} out of range (0..{})", period.p2_bucket(), P::BUCKETS),
        }
    }

    let periods_ago = |last: Option<NaiveDate>| last.map(|d| (latest - d).num_days() / P::PERIOD_DAYS);

    for bucket in stats.iter_mut() {
        bucket.total_samples = total_samples;
        bucket.p1_probability = percentage(bucket.p1_count, total_samples);
        bucket.p2_probability = percentage(bucket.p2_count, total_samples);
        bucket.last_p1_ago = periods_ago(last_p1[bucket.bucket_index]);
        bucket.last_p2_ago = periods_ago(last_p2[bucket.bucket_index]);
    }

    #[cfg(debug_assertions)]
    if DF.log_stats {
        log::info!(
            "Bucket stats: {} of {} periods over {} buckets (latest {})",
            total_samples,
            periods.len(),
            P::BUCKETS,
            latest
        );
    }

    stats
}

/// 24 hour-of-day buckets, optionally restricted to days whose weekday (0 = Sunday) is listed.
pub fn calculate_hourly_stats(pivots: &[DailyPivot], weekdays: Option<&[u32]>) -> Vec<BucketStats> {
    calculate_bucket_stats(pivots, weekdays)
}

/// 7 day-of-week buckets (0 = Sunday) over weekly pivots.
pub fn calculate_weekday_stats(weeks: &[WeeklyPivot]) -> Vec<BucketStats> {
    calculate_bucket_stats(weeks, None)
}

/// Bucket with the highest probability for `rank`; earliest index wins ties.
/// None when every bucket is at zero.
pub fn most_likely_bucket(stats: &[BucketStats], rank: PivotRank) -> Option<&BucketStats> {
    let prob = |b: &BucketStats| match rank {
        PivotRank::P1 => b.p1_probability,
        PivotRank::P2 => b.p2_probability,
    };
    stats
        .iter()
        .filter(|&b| prob(b) > 0.0)
        .fold(None, |best: Option<&BucketStats>, b| match best {
            Some(current) if prob(current) >= prob(b) => Some(current),
            _ => Some(b),
        })
}
