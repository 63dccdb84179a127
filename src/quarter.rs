//! Quarter arithmetic: fixed three-month windows of the calendar year.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::interval::{end_of_day, start_of_day};

/// An ordered pair of instants with `start <= end`.
///
/// Every range produced by this library (quarter windows) satisfies the
/// invariant; both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Whether `instant` falls inside the range, bounds included.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// The quarter a month belongs to: months 1-3 map to 1, 4-6 to 2, 7-9 to 3,
/// 10-12 to 4. Any other input maps to 0.
pub fn quarter_of_month(month: u32) -> u32 {
    match month {
        1..=3 => 1,
        4..=6 => 2,
        7..=9 => 3,
        10..=12 => 4,
        _ => 0,
    }
}

/// The quarter containing `date`, 1 through 4.
pub fn quarter_of_date(date: NaiveDate) -> u32 {
    quarter_of_month(date.month())
}

/// The quarter immediately preceding the one containing `date`.
///
/// A date in Q1 lands in Q4 of the previous year; the rollover is computed
/// explicitly rather than through month-field normalization. The range runs
/// from the first day of the quarter at 00:00:00.000 to the last day at
/// 23:59:59.999.
pub fn last_quarter_range(date: NaiveDate) -> DateRange {
    let quarter = quarter_of_date(date);
    let (year, target) = if quarter == 1 {
        (date.year() - 1, 4)
    } else {
        (date.year(), quarter - 1)
    };
    let start = quarter_start(year, target);
    let next_start = if target == 4 {
        quarter_start(year + 1, 1)
    } else {
        quarter_start(year, target + 1)
    };
    DateRange::new(start_of_day(start), end_of_day(next_start - Duration::days(1)))
}

/// The last day of the quarter preceding the one containing `date`.
pub fn last_quarter_end(date: NaiveDate) -> NaiveDateTime {
    last_quarter_range(date).end
}

fn quarter_start(year: i32, quarter: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1).unwrap()
}

/// A `"{year}_{quarter}"` tag for `date`, or for the quarter after it when
/// `next` is set. `None` means today. Q4 rolls into Q1 of the next year.
pub fn quarter_label(date: Option<NaiveDate>, next: bool) -> String {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let mut year = date.year();
    let mut quarter = quarter_of_date(date);
    if next {
        if quarter == 4 {
            year += 1;
            quarter = 1;
        } else {
            quarter += 1;
        }
    }
    format!("{year}_{quarter}")
}
