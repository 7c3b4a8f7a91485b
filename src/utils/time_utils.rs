use chrono::{DateTime, NaiveDate, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Whole days from `from` to `to`, rounded up. Negative when `to` is earlier.
    pub fn ceil_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
        let diff_ms = (to - from).num_milliseconds();
        (diff_ms as f64 / Self::MS_IN_D as f64).ceil() as i64
    }

    /// Parse `%Y-%m-%d` as UTC midnight.
    pub fn parse_utc_date(text: &str) -> Option<DateTime<Utc>> {
        NaiveDate::parse_from_str(text.trim(), Self::STANDARD_TIME_FORMAT)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}
