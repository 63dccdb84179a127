//! String/date conversions, now-relative strings, and timestamp helpers.
//!
//! All formatting is value-based chrono formatting; there is no shared
//! formatter state, so every function here is safe to call concurrently.
//! Parsing failures surface [`DateError::Format`] with the offending input
//! and pattern; the only parse that can legitimately return "nothing" is
//! [`parse_date_time_str`] on blank input.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime,
    SecondsFormat, TimeZone, Utc,
};
use log::warn;

use crate::constants::{
    FORMAT_COMPACT_FULL, FORMAT_FULL, FORMAT_ISO, FORMAT_YM, FORMAT_YMD, MILLIS_PER_DAY,
    MINUTE_PRECISION_LEN,
};
use crate::error::{DateError, Result};
use crate::interval::shift_months;
use crate::validate;

/// Format a date-time with an arbitrary strftime pattern.
pub fn format_with(datetime: NaiveDateTime, pattern: &str) -> String {
    datetime.format(pattern).to_string()
}

/// Format a date-time as `yyyy-MM-dd HH:mm:ss`.
pub fn format_date_time(datetime: NaiveDateTime) -> String {
    format_with(datetime, FORMAT_FULL)
}

/// Format a date-time as compact `yyyyMMddHHmmss`.
pub fn format_compact(datetime: NaiveDateTime) -> String {
    format_with(datetime, FORMAT_COMPACT_FULL)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(date: NaiveDate) -> String {
    date.format(FORMAT_YMD).to_string()
}

/// Format a date as `yyyy-MM`.
pub fn format_year_month(date: NaiveDate) -> String {
    date.format(FORMAT_YM).to_string()
}

/// Parse a date string against a strftime pattern.
///
/// # Arguments
/// * `s` - the input string
/// * `pattern` - a date pattern such as [`FORMAT_YMD`]
///
/// # Returns
/// * `Result<NaiveDate>` - the parsed date, or [`DateError::Format`]
pub fn parse_date(s: &str, pattern: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, pattern).map_err(|_| DateError::format(s, pattern))
}

/// Parse a date-time string against a strftime pattern.
pub fn parse_date_time(s: &str, pattern: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, pattern).map_err(|_| DateError::format(s, pattern))
}

/// Parse a `yyyy-MM-dd` string.
pub fn parse_ymd(s: &str) -> Result<NaiveDate> {
    parse_date(s, FORMAT_YMD)
}

/// Parse a compact `yyyyMMddHHmmss` string.
pub fn parse_compact(s: &str) -> Result<NaiveDateTime> {
    parse_date_time(s, FORMAT_COMPACT_FULL)
}

/// Parse a `yyyy-MM` string; the day defaults to the first of the month.
pub fn parse_year_month(s: &str) -> Result<NaiveDate> {
    let err = || DateError::format(s, FORMAT_YM);
    if !validate::is_year_month(s) {
        return Err(err());
    }
    let (year, month) = s.split_once('-').ok_or_else(err)?;
    let year: i32 = year.parse().map_err(|_| err())?;
    let month: u32 = month.parse().map_err(|_| err())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(err)
}

/// Parse a `yyyy` string; month and day default to January 1.
pub fn parse_year(s: &str) -> Result<NaiveDate> {
    let err = || DateError::format(s, crate::constants::FORMAT_Y);
    if !validate::is_year(s) {
        return Err(err());
    }
    let year: i32 = s.parse().map_err(|_| err())?;
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(err)
}

/// Parse a full `yyyy-MM-dd HH:mm:ss` string.
///
/// Blank input is the one documented absent case and returns `Ok(None)`;
/// any other malformed input is an error.
pub fn parse_date_time_str(s: &str) -> Result<Option<NaiveDateTime>> {
    if s.trim().is_empty() {
        return Ok(None);
    }
    parse_date_time(s, FORMAT_FULL).map(Some)
}

/// Parse an ISO-8601 date-time with offset, e.g.
/// `2012-05-25T14:59:38.237-07:00` or `2012-06-19T01:07:52.000Z`.
pub fn parse_iso(s: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).map_err(|_| DateError::format(s, FORMAT_ISO))
}

/// Render an offset date-time with millisecond precision and offset.
pub fn format_iso(datetime: &DateTime<FixedOffset>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Format current local date to YYYY-MM-DD string
pub fn today() -> String {
    format_ymd(Local::now().date_naive())
}

/// Yesterday's local date as `yyyy-MM-dd`.
pub fn yesterday() -> String {
    format_ymd(Local::now().date_naive() - Duration::days(1))
}

/// The current local time rendered with `pattern`; a blank pattern falls
/// back to the full date-time pattern.
pub fn current_time(pattern: &str) -> String {
    let pattern = if pattern.trim().is_empty() { FORMAT_FULL } else { pattern };
    Local::now().format(pattern).to_string()
}

/// Format date with offset from today to YYYY-MM-DD string
///
/// # Arguments
/// * `days_offset` - Number of days to add/subtract from today
/// * `pattern` - target pattern; blank falls back to `yyyy-MM-dd`
pub fn day_with_offset(days_offset: i64, pattern: &str) -> String {
    let pattern = if pattern.trim().is_empty() { FORMAT_YMD } else { pattern };
    (Local::now() + Duration::days(days_offset)).format(pattern).to_string()
}

/// The current month shifted by `months_offset`, rendered with `pattern`;
/// blank falls back to `yyyy-MM`.
pub fn year_month_with_offset(months_offset: i64, pattern: &str) -> String {
    let pattern = if pattern.trim().is_empty() { FORMAT_YM } else { pattern };
    shift_months(Local::now().naive_local(), months_offset).format(pattern).to_string()
}

/// The current year shifted by `years_offset`, as `yyyy`.
pub fn year_with_offset(years_offset: i32) -> String {
    (Local::now().year() + years_offset).to_string()
}

/// Whether a list of `yyyy-MM-dd` strings includes today's local date.
pub fn contains_today(dates: &[String]) -> bool {
    let today = today();
    dates.iter().any(|date| *date == today)
}

/// The date 30 days before a `yyyy-MM-dd` string.
///
/// Unparsable input falls back to today as the reference point; the fallback
/// is logged.
pub fn thirty_days_before(s: &str) -> String {
    let date = match parse_ymd(s) {
        Ok(date) => date,
        Err(err) => {
            warn!("thirty_days_before: {err}, using today");
            Local::now().date_naive()
        }
    };
    format_ymd(date - Duration::days(30))
}

/// Clip a full date-time string to minute precision (`yyyy-MM-dd HH:mm`).
/// Strings already at or below that length come back unchanged.
pub fn truncate_to_minute(s: &str) -> &str {
    s.get(..MINUTE_PRECISION_LEN).unwrap_or(s)
}

/// Shift a `yyyy-MM` string by a number of months (negative moves back).
pub fn shift_year_month(s: &str, months: i64) -> Result<String> {
    let shifted = shift_months(parse_year_month(s)?.and_time(NaiveTime::MIN), months);
    Ok(shifted.format(FORMAT_YM).to_string())
}

/// The month before a `yyyy-MM` string; blank input means the current month.
pub fn previous_year_month(s: &str) -> Result<String> {
    if s.trim().is_empty() {
        return Ok(shift_months(Local::now().naive_local(), -1).format(FORMAT_YM).to_string());
    }
    shift_year_month(s, -1)
}

/// The same month one year earlier, as `yyyy-MM`.
pub fn same_month_last_year(s: &str) -> Result<String> {
    let date = parse_year_month(s)?;
    let last = NaiveDate::from_ymd_opt(date.year() - 1, date.month(), 1)
        .ok_or_else(|| DateError::format(s, FORMAT_YM))?;
    Ok(format_year_month(last))
}

/// December of the year before a `yyyy` string, as `yyyy-MM`.
pub fn december_of_previous_year(year: &str) -> Result<String> {
    let date = parse_year(year)?;
    Ok(format!("{}-12", date.year() - 1))
}

/// Every `yyyy-MM` month from `min` through `max`, inclusive.
pub fn month_list_between(min: &str, max: &str) -> Result<Vec<String>> {
    let min = parse_year_month(min)?;
    let max = parse_year_month(max)?;
    let mut months = Vec::new();
    let mut current = min;
    while current <= max {
        months.push(format_year_month(current));
        current = shift_months(current.and_time(NaiveTime::MIN), 1).date();
    }
    Ok(months)
}

/// Render an epoch-millisecond timestamp in the local zone with `pattern`.
pub fn millis_to_string(millis: i64, pattern: &str) -> Result<String> {
    let instant = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        DateError::InvalidArgument(format!("timestamp {millis} ms is out of range"))
    })?;
    Ok(instant.with_timezone(&Local).format(pattern).to_string())
}

/// Parse a local date-time string and return its epoch second count.
/// Date-only patterns default the time of day to midnight.
pub fn string_to_epoch_seconds(s: &str, pattern: &str) -> Result<i64> {
    let datetime = match NaiveDateTime::parse_from_str(s, pattern) {
        Ok(datetime) => datetime,
        Err(_) => parse_date(s, pattern)?.and_time(NaiveTime::MIN),
    };
    Ok(resolve_local(datetime).timestamp())
}

/// Epoch milliseconds of today's local midnight.
pub fn today_start_millis() -> i64 {
    resolve_local(Local::now().date_naive().and_time(NaiveTime::MIN)).timestamp_millis()
}

/// Epoch milliseconds of the local midnight `day_offset` days from today,
/// computed from fixed-length days and the current zone offset. Like the
/// rest of the interval arithmetic this ignores daylight-saving transitions.
pub fn midnight_millis(day_offset: i64) -> i64 {
    let zone_offset = i64::from(Local::now().offset().local_minus_utc()) * 1_000;
    (Utc::now().timestamp_millis() / MILLIS_PER_DAY + day_offset) * MILLIS_PER_DAY - zone_offset
}

fn resolve_local(datetime: NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(&datetime)
        .single()
        .unwrap_or_else(|| Local.from_utc_datetime(&datetime))
}
