mod bucket_stats;

pub use bucket_stats::{BucketStats, PivotPeriod};
