mod maths_utils;
mod time_utils;

pub use time_utils::{
    TimeUtils, date_key, day_of_week, epoch_ms_to_utc, hour_label, hour_of_day_from_ms,
    utc_date_from_ms, week_start_monday, weekday_name,
};

pub use maths_utils::remap;
pub(crate) use maths_utils::{clamp_pct, get_max, get_min, percentage};
