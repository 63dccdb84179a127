//! Week-number arithmetic.
//!
//! Weeks start on a configurable first day (Monday unless stated otherwise).
//! Week 1 of a year is the first *complete* week: the one beginning on the
//! first occurrence of the week's first day inside that year. A week that
//! spans a year boundary belongs to the year containing its first day, so
//! with Monday starts, Mon 2008-12-29 through Sun 2009-01-04 is the last
//! week of 2008 and week 1 of 2009 begins on 2009-01-05.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::WEEK_DAYS;
use crate::error::{DateError, Result};

/// A week number paired with its week-based year.
///
/// The week-based year can differ from the calendar year of the days the
/// week contains: 2009-01-02 belongs to week 52 of 2008.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

/// Days from `first_day` to `day`, walking forward, in `0..7`.
fn days_from(first_day: Weekday, day: Weekday) -> i64 {
    let first = first_day.num_days_from_monday() as i64;
    let target = day.num_days_from_monday() as i64;
    (7 + target - first) % 7
}

/// The start of week 1: the first occurrence of `first_day` in `year`.
fn first_week_start(year: i32, first_day: Weekday) -> NaiveDate {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    jan1 + Duration::days(days_from(jan1.weekday(), first_day))
}

fn check_week(week: u32) -> Result<()> {
    if week == 0 {
        return Err(DateError::InvalidArgument(
            "week number must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Number of weeks in `year` with Monday as the first day of the week.
///
/// Either 52 or 53: a year has 53 weeks iff the first day of week 53 still
/// falls inside the year.
pub fn weeks_in_year(year: i32) -> u32 {
    weeks_in_year_starting(year, Weekday::Mon)
}

/// Number of weeks in `year` for an arbitrary first day of the week.
pub fn weeks_in_year_starting(year: i32, first_day: Weekday) -> u32 {
    let week53_start = first_week_start(year, first_day) + Duration::days(52 * 7);
    if week53_start.year() == year {
        53
    } else {
        52
    }
}

/// Resolve the date of a (year, week, weekday) triple.
///
/// # Arguments
/// * `year` - the week-based year
/// * `week` - week number, starting at 1
/// * `day_of_week` - 1 through 7, counted from `first_day`
/// * `first_day` - which weekday opens the week
///
/// A week number past the last week of the year rolls into the following
/// year, matching lenient host-calendar behavior.
pub fn date_for_weekday(
    year: i32,
    week: u32,
    day_of_week: u32,
    first_day: Weekday,
) -> Result<NaiveDate> {
    check_week(week)?;
    if !(1..=WEEK_DAYS).contains(&day_of_week) {
        return Err(DateError::InvalidArgument(format!(
            "day of week must be 1 through 7, got {day_of_week}"
        )));
    }
    let offset = (week as i64 - 1) * 7 + (day_of_week as i64 - 1);
    Ok(first_week_start(year, first_day) + Duration::days(offset))
}

/// The 7 consecutive dates of a week, first day first.
pub fn week_days(year: i32, week: u32, first_day: Weekday) -> Result<Vec<NaiveDate>> {
    let start = date_for_weekday(year, week, 1, first_day)?;
    Ok((0..WEEK_DAYS as i64).map(|i| start + Duration::days(i)).collect())
}

/// The (start, end) dates of every week of `year`, with Monday starts.
pub fn weeks_of_year(year: i32) -> Vec<(NaiveDate, NaiveDate)> {
    let first = first_week_start(year, Weekday::Mon);
    (0..weeks_in_year(year) as i64)
        .map(|w| {
            let start = first + Duration::days(w * 7);
            (start, start + Duration::days(6))
        })
        .collect()
}

/// The week before (year, week), wrapping into the previous year's last week.
pub fn previous_week(year: i32, week: u32) -> Result<WeekKey> {
    check_week(week)?;
    if week == 1 {
        Ok(WeekKey {
            year: year - 1,
            week: weeks_in_year(year - 1),
        })
    } else {
        Ok(WeekKey { year, week: week - 1 })
    }
}

/// The week after (year, week), wrapping into week 1 of the next year.
pub fn next_week(year: i32, week: u32) -> Result<WeekKey> {
    check_week(week)?;
    if week == weeks_in_year(year) {
        Ok(WeekKey { year: year + 1, week: 1 })
    } else {
        Ok(WeekKey { year, week: week + 1 })
    }
}

/// The week and week-based year containing `date`, optionally shifted.
///
/// `offset` of -1 or 1 selects the previous or next week; any other value
/// selects the current week.
pub fn week_and_year(date: NaiveDate, offset: i32, first_day: Weekday) -> Result<WeekKey> {
    let start = start_of_week_starting(date, first_day);
    let year = start.year();
    let week = ((start - first_week_start(year, first_day)).num_days() / 7 + 1) as u32;
    match offset {
        -1 => previous_week(year, week),
        1 => next_week(year, week),
        _ => Ok(WeekKey { year, week }),
    }
}

/// The 7 dates of the week around `date`, where the week's first day is the
/// weekday of `week_start_date`.
///
/// `offset` of -1 or 1 selects the previous or next week.
pub fn week_days_around(
    date: NaiveDate,
    offset: i32,
    week_start_date: NaiveDate,
) -> Result<Vec<NaiveDate>> {
    let first_day = week_start_date.weekday();
    let key = week_and_year(date, offset, first_day)?;
    week_days(key.year, key.week, first_day)
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week_starting(date, Weekday::Mon)
}

/// Sunday of the week containing `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

fn start_of_week_starting(date: NaiveDate, first_day: Weekday) -> NaiveDate {
    date - Duration::days(days_from(first_day, date.weekday()))
}

/// Calculate the next occurrence of a target weekday from a given date
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let from_w = from.weekday().num_days_from_monday() as i64;
    let tgt_w = target.num_days_from_monday() as i64;
    let mut delta = (7 + tgt_w - from_w) % 7;
    if delta == 0 {
        delta = 7;
    }
    from + Duration::days(delta)
}
