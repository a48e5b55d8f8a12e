use chrono::{DateTime, Datelike, Days, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const HOURS_IN_D: u32 = 24;
    pub const DAYS_IN_W: u32 = 7;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// UTC hour of day (0-23). Pure arithmetic, so valid for any i64 including pre-epoch values.
pub fn hour_of_day_from_ms(epoch_ms: i64) -> u32 {
    epoch_ms.div_euclid(TimeUtils::MS_IN_H).rem_euclid(TimeUtils::HOURS_IN_D as i64) as u32
}

/// UTC calendar day of a timestamp. None if chrono cannot represent it.
pub fn utc_date_from_ms(epoch_ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(epoch_ms).map(|dt| dt.date_naive())
}

/// Day of week with 0 = Sunday.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Monday of the ISO week containing `date`, given its Sunday-based day of week.
pub fn week_start_monday(date: NaiveDate, day_of_week: u32) -> Option<NaiveDate> {
    let back = (day_of_week as u64 + 6) % TimeUtils::DAYS_IN_W as u64;
    date.checked_sub_days(Days::new(back))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    match utc_date_from_ms(epoch_ms) {
        Some(date) => date_key(date),
        None => format!("<invalid {}ms>", epoch_ms),
    }
}

/// Short English name for a Sunday-based weekday index.
pub fn weekday_name(day_of_week: u32) -> &'static str {
    WEEKDAY_NAMES
        .get(day_of_week as usize)
        .copied()
        .unwrap_or("???")
}

/// "03:00" style label for an hour bucket.
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour % TimeUtils::HOURS_IN_D)
}
