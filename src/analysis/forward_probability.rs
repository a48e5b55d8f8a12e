#[cfg(debug_assertions)]
use crate::config::DF;

use crate::{models::BucketStats, utils::percentage};

/// Re-weights probabilities to "given it has not happened yet": buckets before `current`
/// drop to zero and the remaining ones are renormalized over their own counts.
/// `cycle_position` maps a bucket index to its place in the cycle, so cycles that do not start
/// at bucket 0 can be expressed. Counts and recency pass through untouched.
pub fn adjust_forward<F>(stats: &[BucketStats], current: usize, cycle_position: F) -> Vec<BucketStats>
where
    F: Fn(usize) -> usize,
{
    let now = cycle_position(current);
    let remaining = |b: &BucketStats| b.bucket_index < stats.len() && cycle_position(b.bucket_index) >= now;

    if current >= stats.len() || !stats.iter().any(remaining) {
        return stats.to_vec();
    }

    let s1: usize = stats.iter().filter(|&b| remaining(b)).map(|b| b.p1_count).sum();
    let s2: usize = stats.iter().filter(|&b| remaining(b)).map(|b| b.p2_count).sum();

    #[cfg(debug_assertions)]
    if DF.log_stats {
        log::info!("Forward adjust from bucket {}: {} P1 and {} P2 occurrences still ahead", current, s1, s2);
    }

    stats
        .iter()
        .map(|b| {
            let (p1_probability, p2_probability) = if remaining(b) {
                (percentage(b.p1_count, s1), percentage(b.p2_count, s2))
            } else {
                (0.0, 0.0)
            };
            BucketStats {
                p1_probability,
                p2_probability,
                ..b.clone()
            }
        })
        .collect()
}

/// Hour-of-day buckets conditioned on the current UTC hour.
pub fn adjust_for_current_day(stats: &[BucketStats], current_hour: u32) -> Vec<BucketStats> {
    adjust_forward(stats, current_hour as usize, |hour| hour)
}

/// Weekday buckets (0 = Sunday) conditioned on the current weekday. Buckets with a lower
/// index than today count as past, Sunday included.
pub fn adjust_for_current_week(stats: &[BucketStats], current_weekday: u32) -> Vec<BucketStats> {
    adjust_forward(stats, current_weekday as usize, |day| day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with(counts: &[(usize, usize, usize)], buckets: usize) -> Vec<BucketStats> {
        let total: usize = counts.iter().map(|(_, p1, _)| p1).sum();
        (0..buckets)
            .map(|i| {
                let (p1_count, p2_count) = counts
                    .iter()
                    .find(|(b, _, _)| *b == i)
                    .map(|(_, p1, p2)| (*p1, *p2))
                    .unwrap_or((0, 0));
                BucketStats {
                    bucket_index: i,
                    p1_count,
                    p2_count,
                    total_samples: total,
                    p1_probability: percentage(p1_count, total),
                    p2_probability: percentage(p2_count, total),
                    last_p1_ago: (p1_count > 0).then_some(i as i64),
                    last_p2_ago: None,
                }
            })
            .collect()
    }

    #[test]
    fn past_hours_zero_future_hours_renormalized() {
        let stats = stats_with(&[(3, 3, 0), (14, 2, 4), (20, 3, 4)], 24);
        let adjusted = adjust_for_current_day(&stats, 12);
        assert_eq!(adjusted.len(), 24);
        assert_eq!(adjusted[3].p1_probability, 0.0);
        assert_eq!(adjusted[14].p1_probability, 40.0);
        assert_eq!(adjusted[20].p1_probability, 60.0);
        assert_eq!(adjusted[14].p2_probability, 50.0);
        assert!(adjusted[..12].iter().all(|b| b.p1_probability == 0.0 && b.p2_probability == 0.0));
    }

    #[test]
    fn future_probabilities_sum_to_100() {
        let stats = stats_with(&[(1, 4, 1), (5, 1, 1), (9, 7, 2), (13, 2, 3), (23, 5, 12)], 24);
        for current in 0..24u32 {
            let adjusted = adjust_for_current_day(&stats, current);
            let s1: usize = stats[current as usize..].iter().map(|b| b.p1_count).sum();
            let sum: f64 = adjusted.iter().map(|b| b.p1_probability).sum();
            if s1 > 0 {
                assert!((sum - 100.0).abs() < 1e-9, "hour {}: {}", current, sum);
            } else {
                assert_eq!(sum, 0.0);
            }
        }
    }

    #[test]
    fn counts_and_recency_pass_through() {
        let stats = stats_with(&[(2, 3, 1), (8, 1, 3)], 24);
        let adjusted = adjust_for_current_day(&stats, 5);
        for (before, after) in stats.iter().zip(&adjusted) {
            assert_eq!(before.p1_count, after.p1_count);
            assert_eq!(before.p2_count, after.p2_count);
            assert_eq!(before.total_samples, after.total_samples);
            assert_eq!(before.last_p1_ago, after.last_p1_ago);
        }
        assert_eq!(adjusted, adjust_for_current_day(&stats, 5));
    }

    #[test]
    fn out_of_cycle_position_returns_input() {
        let stats = stats_with(&[(2, 3, 1)], 24);
        assert_eq!(adjust_for_current_day(&stats, 24), stats);
        assert!(adjust_for_current_day(&[], 0).is_empty());
    }

    #[test]
    fn earlier_weekdays_are_past_midweek() {
        // Sunday has two P1s, every other day one
        let counts: Vec<(usize, usize, usize)> = (0..7).map(|d| (d, if d == 0 { 2 } else { 1 }, 1)).collect();
        let stats = stats_with(&counts, 7);
        let adjusted = adjust_for_current_week(&stats, 3);
        for past in 0..3 {
            assert_eq!(adjusted[past].p1_probability, 0.0);
            assert_eq!(adjusted[past].p2_probability, 0.0);
        }
        assert!(adjusted[3..].iter().all(|b| b.p1_probability == 25.0 && b.p2_probability == 25.0));

        // On Sunday the whole week is still ahead
        let adjusted = adjust_for_current_week(&stats, 0);
        assert_eq!(adjusted[0].p1_probability, 25.0);
        assert_eq!(adjusted[6].p1_probability, 12.5);
    }
}
