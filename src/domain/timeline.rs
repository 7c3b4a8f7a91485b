use {
    crate::{config::TIMELINE, utils::TimeUtils},
    chrono::{DateTime, Utc},
    thiserror::Error,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("timeline start {start} is not before end {end}")]
    NotOrdered { start: String, end: String },
    #[error("timeline window rounds to zero days")]
    ZeroLength,
    #[error("invalid timeline date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Fixed start/end pair over which progress is measured.
/// Only constructible with `start < end`, so `total_days` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    total_days: i64,
}

impl TimelineWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimelineError> {
        if start >= end {
            return Err(TimelineError::NotOrdered {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        let total_days = TimeUtils::ceil_days_between(start, end);
        if total_days <= 0 {
            return Err(TimelineError::ZeroLength);
        }
        Ok(Self {
            start,
            end,
            total_days,
        })
    }

    pub fn from_dates(start: &str, end: &str) -> Result<Self, TimelineError> {
        let parse = |s: &str| {
            TimeUtils::parse_utc_date(s).ok_or_else(|| TimelineError::InvalidDate(s.to_string()))
        };
        Self::new(parse(start)?, parse(end)?)
    }

    /// The degree window from `config::TIMELINE`. Called once at startup; an error here is fatal.
    pub fn configured() -> Result<Self, TimelineError> {
        Self::from_dates(TIMELINE.start, TIMELINE.end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn total_days(&self) -> i64 {
        self.total_days
    }

    /// Progress through the window at `now`.
    ///
    /// `elapsed_days` is floored at 0 but deliberately NOT capped at `total_days`:
    /// after the end date the day count keeps growing while `percentage` sits at 100.
    pub fn compute(&self, now: DateTime<Utc>) -> ProgressSnapshot {
        let elapsed_raw = TimeUtils::ceil_days_between(self.start, now);
        let percentage = (elapsed_raw as f64 / self.total_days as f64 * 100.0).clamp(0.0, 100.0);
        ProgressSnapshot {
            elapsed_days: elapsed_raw.max(0),
            total_days: self.total_days,
            percentage,
        }
    }
}

/// Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    pub elapsed_days: i64,
    pub total_days: i64,
    pub percentage: f64,
}

impl ProgressSnapshot {
    /// `0.0..=1.0`, for proportional (two segment) bars.
    pub fn fraction(&self) -> f32 {
        (self.percentage / 100.0) as f32
    }

    pub fn summary(&self) -> String {
        format!(
            "{} / {} days ({:.1}%)",
            self.elapsed_days, self.total_days, self.percentage
        )
    }
}

/// Fixed-width glyph bar.
pub struct ProgressBar {
    pub width: usize,
    pub filled: char,
    pub empty: char,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            width: TIMELINE.bar_width,
            filled: TIMELINE.glyph_filled,
            empty: TIMELINE.glyph_empty,
        }
    }
}

impl ProgressBar {
    /// `(filled, empty)` cell counts.
    /// Uses `f64::round`, so an exact `.5` goes up (away from zero), same as JS `Math.round` for positives.
    pub fn cells(&self, percentage: f64) -> (usize, usize) {
        let pct = if percentage.is_nan() {
            0.0
        } else {
            percentage.clamp(0.0, 100.0)
        };
        let filled = ((pct / 100.0 * self.width as f64).round() as usize).min(self.width);
        (filled, self.width - filled)
    }

    pub fn render(&self, percentage: f64) -> String {
        let (filled, empty) = self.cells(percentage);
        let mut bar = String::with_capacity((self.width + 2) * 3);
        bar.push('[');
        bar.extend(std::iter::repeat_n(self.filled, filled));
        bar.extend(std::iter::repeat_n(self.empty, empty));
        bar.push(']');
        bar
    }
}
