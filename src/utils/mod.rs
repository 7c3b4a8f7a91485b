mod time_utils;

pub use time_utils::{TimeUtils, format_date, now_utc};
