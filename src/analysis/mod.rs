mod daily_pivots;
mod forward_probability;
mod occurrence_stats;
mod weekly_pivots;

pub use daily_pivots::{calculate_daily_pivots, calculate_daily_pivots_with, candle_direction_order};
pub use forward_probability::{adjust_for_current_day, adjust_for_current_week, adjust_forward};
pub use occurrence_stats::{
    PivotRank, calculate_bucket_stats, calculate_hourly_stats, calculate_weekday_stats,
    most_likely_bucket,
};
pub use weekly_pivots::calculate_weekly_pivots;
