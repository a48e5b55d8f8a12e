use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

use crate::utils::date_key;

/// Which of a period's two extremes a pivot refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum PivotType {
    High,
    Low,
}

impl PivotType {
    pub fn complement(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

/// The two turning points of one UTC calendar day. P1 is whichever extreme was touched first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPivot {
    pub date: NaiveDate,
    /// 0 = Sunday
    pub day_of_week: u32,

    pub daily_open: f64,
    pub daily_high: f64,
    pub daily_low: f64,
    pub high_hour: u32,
    pub low_hour: u32,

    pub p1_type: PivotType,
    pub p1_hour: u32,
    pub p1_price: f64,
    pub p2_type: PivotType,
    pub p2_hour: u32,
    pub p2_price: f64,
}

impl DailyPivot {
    /// "YYYY-MM-DD"
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }
}

/// Turning points of one ISO week (Monday to Sunday), at day granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPivot {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub iso_week_number: u32,
    pub iso_year: i32,

    pub weekly_open: f64,
    pub weekly_high: f64,
    pub weekly_low: f64,
    // Sunday-based day of week, same as DailyPivot::day_of_week
    pub high_day: u32,
    pub low_day: u32,

    pub p1_type: PivotType,
    pub p1_day: u32,
    pub p1_price: f64,
    pub p2_type: PivotType,
    pub p2_day: u32,
    pub p2_price: f64,
}

impl WeeklyPivot {
    pub fn week_start_key(&self) -> String {
        date_key(self.week_start)
    }

    pub fn week_end_key(&self) -> String {
        date_key(self.week_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_type_text_form() {
        assert_eq!(PivotType::High.to_string(), "HIGH");
        assert_eq!(serde_json::to_string(&PivotType::Low).unwrap(), "\"LOW\"");
        assert_eq!(PivotType::Low.complement(), PivotType::High);
    }
}
