//! Interval arithmetic over days, months, and years.
//!
//! Differences are computed by truncating division of the millisecond gap by
//! fixed-length units. A day is always 86 400 000 ms here: results near a
//! daylight-saving transition can be short by up to an hour, and callers that
//! need zone-correct differences should not use this module. Month and year
//! differences are deliberate approximations kept for compatibility
//! (`months_between` divides by 30, `years_between` subtracts year numbers).

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::MILLIS_PER_DAY;

/// A calendar field that [`add_field`] can shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateField {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

/// Whole fixed-length days between two instants, truncated toward zero.
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_milliseconds() / MILLIS_PER_DAY
}

/// Whole days between two dates, both taken at midnight.
pub fn days_between_dates(start: NaiveDate, end: NaiveDate) -> i64 {
    days_between(start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN))
}

/// Whole hours between two instants, truncated toward zero.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_hours()
}

/// Whole minutes between two instants, truncated toward zero.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

/// Whole seconds between two instants, truncated toward zero.
pub fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds()
}

/// Approximate month count between two instants: day difference over 30.
///
/// Not calendar-accurate month counting; kept as-is for compatibility.
pub fn months_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    days_between(start, end) / 30
}

/// Calendar-year difference only: `end.year - start.year`.
///
/// Dec 31 to Jan 1 of the next year yields 1, not 0.
pub fn years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    end.year() - start.year()
}

/// The same day of month one calendar month earlier, or `None` when that day
/// does not exist in the target month.
///
/// Day 31 into a 30-day month and day 29/30/31 into February come back as
/// `None` rather than clamping; February's maximum depends on the leap-year
/// status of the *target* year.
pub fn same_day_last_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, date.day())
}

/// The same weekday one week earlier.
pub fn same_day_last_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(7)
}

/// Add `n` days, wrapping across month and year boundaries.
pub fn plus_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

/// Subtract `n` days, wrapping across month and year boundaries.
pub fn minus_days(date: NaiveDate, n: i64) -> NaiveDate {
    date - Duration::days(n)
}

/// Shift one calendar field by `amount` (which may be negative), delegating
/// normalization to the host calendar: day arithmetic wraps across month and
/// year boundaries, month arithmetic clamps the day-of-month (Jan 31 plus
/// one month is the last day of February).
pub fn add_field(datetime: NaiveDateTime, field: DateField, amount: i64) -> NaiveDateTime {
    match field {
        DateField::Years => shift_months(datetime, amount * 12),
        DateField::Months => shift_months(datetime, amount),
        DateField::Weeks => datetime + Duration::weeks(amount),
        DateField::Days => datetime + Duration::days(amount),
        DateField::Hours => datetime + Duration::hours(amount),
        DateField::Minutes => datetime + Duration::minutes(amount),
        DateField::Seconds => datetime + Duration::seconds(amount),
    }
}

pub(crate) fn shift_months(datetime: NaiveDateTime, months: i64) -> NaiveDateTime {
    if months >= 0 {
        datetime + Months::new(months as u32)
    } else {
        datetime - Months::new(months.unsigned_abs() as u32)
    }
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The last representable millisecond of `date`: 23:59:59.999.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::milliseconds(1)
}

/// Midnight on the first day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDateTime {
    start_of_day(NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap())
}

/// The 7 dates ending the day before `reference`, newest first.
pub fn trailing_week(reference: NaiveDate) -> Vec<NaiveDate> {
    let newest = reference - Duration::days(1);
    (0..7).map(|i| newest - Duration::days(i)).collect()
}

/// The trailing week shifted one further week into the past, newest first.
pub fn trailing_week_before(reference: NaiveDate) -> Vec<NaiveDate> {
    trailing_week(reference - Duration::days(7))
}

/// [`same_day_last_month`] of each trailing-week date; days that do not
/// exist in the earlier month are skipped.
pub fn trailing_week_last_month(reference: NaiveDate) -> Vec<NaiveDate> {
    trailing_week(reference)
        .into_iter()
        .filter_map(same_day_last_month)
        .collect()
}
