//! Relative-time labeling: classify a past instant into a recency bucket.

use std::fmt;

use chrono::{Duration, Local, Months, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Ordered recency buckets for a past instant.
///
/// Each bucket carries a stable code and a display label; [`fmt::Display`]
/// renders the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeExtent {
    OneHour,
    OneDay,
    OneWeek,
    OneMonth,
    OneMonthAgo,
    HalfYearAgo,
    OneYearAgo,
}

impl TimeExtent {
    /// Stable machine-readable code for the bucket.
    pub fn code(&self) -> &'static str {
        match self {
            TimeExtent::OneHour => "ONE_HOUR",
            TimeExtent::OneDay => "ONE_DAY",
            TimeExtent::OneWeek => "ONE_WEEK",
            TimeExtent::OneMonth => "ONE_MONTH",
            TimeExtent::OneMonthAgo => "ONE_MONTH_AGO",
            TimeExtent::HalfYearAgo => "HALF_YEAR_AGO",
            TimeExtent::OneYearAgo => "ONE_YEAR_AGO",
        }
    }

    /// Display label for the bucket.
    pub fn label(&self) -> &'static str {
        match self {
            TimeExtent::OneHour => "近1小时",
            TimeExtent::OneDay => "近1天",
            TimeExtent::OneWeek => "近1周",
            TimeExtent::OneMonth => "近1个月",
            TimeExtent::OneMonthAgo => "1个月以前",
            TimeExtent::HalfYearAgo => "半年以前",
            TimeExtent::OneYearAgo => "1年以前",
        }
    }
}

impl fmt::Display for TimeExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a past local instant into its recency bucket.
///
/// The thresholds are evaluated as a strictly ordered cascade: within 1 hour,
/// 1 day, 1 week, 1 calendar month, 6 months, 12 months; the first match
/// wins and anything older (or a `None` input) maps to the oldest bucket.
/// Month thresholds use calendar-month subtraction with the host's
/// end-of-month clamping. "Now" is read once per call.
pub fn time_extent(date: Option<NaiveDateTime>) -> TimeExtent {
    let Some(date) = date else {
        return TimeExtent::OneYearAgo;
    };
    let now = Local::now().naive_local();
    if date > now - Duration::hours(1) {
        TimeExtent::OneHour
    } else if date > now - Duration::days(1) {
        TimeExtent::OneDay
    } else if date > now - Duration::days(7) {
        TimeExtent::OneWeek
    } else if date > now - Months::new(1) {
        TimeExtent::OneMonth
    } else if date > now - Months::new(6) {
        TimeExtent::OneMonthAgo
    } else if date > now - Months::new(12) {
        TimeExtent::HalfYearAgo
    } else {
        TimeExtent::OneYearAgo
    }
}
