use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use datemath::interval::*;
use datemath::DateField;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn at(date: NaiveDate, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, min, sec).unwrap()
}

#[test]
fn test_days_between_dates() {
    assert_eq!(days_between_dates(ymd(2024, 1, 1), ymd(2024, 3, 1)), 60);
    assert_eq!(days_between_dates(ymd(2024, 3, 1), ymd(2024, 1, 1)), -60);
    assert_eq!(days_between_dates(ymd(2024, 5, 15), ymd(2024, 5, 15)), 0);
}

#[test]
fn test_days_between_truncates_partial_days() {
    let start = at(ymd(2024, 5, 15), 12, 0, 0);
    // 23 hours is not a full day
    assert_eq!(days_between(start, at(ymd(2024, 5, 16), 11, 0, 0)), 0);
    assert_eq!(days_between(start, at(ymd(2024, 5, 16), 12, 0, 0)), 1);
}

#[test]
fn test_smaller_units_between() {
    let start = at(ymd(2024, 5, 15), 10, 0, 0);
    assert_eq!(hours_between(start, at(ymd(2024, 5, 15), 11, 30, 0)), 1);
    assert_eq!(minutes_between(start, at(ymd(2024, 5, 15), 11, 30, 0)), 90);
    assert_eq!(seconds_between(start, at(ymd(2024, 5, 15), 10, 1, 30)), 90);
}

#[test]
fn test_months_between_is_thirty_day_approximation() {
    let start = at(ymd(2024, 1, 1), 0, 0, 0);
    // 90 days / 30, not a calendar month count
    assert_eq!(months_between(start, at(ymd(2024, 3, 31), 0, 0, 0)), 3);
    assert_eq!(months_between(start, at(ymd(2024, 1, 29), 0, 0, 0)), 0);
}

#[test]
fn test_years_between_compares_year_numbers_only() {
    assert_eq!(years_between(ymd(2023, 12, 31), ymd(2024, 1, 1)), 1);
    assert_eq!(years_between(ymd(2024, 1, 1), ymd(2023, 12, 31)), -1);
    assert_eq!(years_between(ymd(2024, 1, 1), ymd(2024, 12, 31)), 0);
}

#[test]
fn test_same_day_last_month_into_february() {
    // 2021 is not a leap year: February tops out at 28
    assert_eq!(same_day_last_month(ymd(2021, 3, 31)), None);
    assert_eq!(same_day_last_month(ymd(2021, 3, 29)), None);
    assert_eq!(same_day_last_month(ymd(2021, 3, 28)), Some(ymd(2021, 2, 28)));

    // 2020 is a leap year: 29 exists, 31 still does not
    assert_eq!(same_day_last_month(ymd(2020, 3, 31)), None);
    assert_eq!(same_day_last_month(ymd(2020, 3, 29)), Some(ymd(2020, 2, 29)));
}

#[test]
fn test_same_day_last_month_short_months() {
    assert_eq!(same_day_last_month(ymd(2024, 5, 31)), None); // April has 30
    assert_eq!(same_day_last_month(ymd(2024, 7, 31)), None); // June has 30
    assert_eq!(same_day_last_month(ymd(2024, 8, 31)), Some(ymd(2024, 7, 31)));
}

#[test]
fn test_same_day_last_month_january_wraps_year() {
    assert_eq!(same_day_last_month(ymd(2024, 1, 15)), Some(ymd(2023, 12, 15)));
}

#[test]
fn test_same_day_last_week() {
    assert_eq!(same_day_last_week(ymd(2024, 1, 3)), ymd(2023, 12, 27));
}

#[test]
fn test_plus_and_minus_days_wrap_boundaries() {
    assert_eq!(plus_days(ymd(2024, 1, 1), 40), ymd(2024, 2, 10));
    assert_eq!(minus_days(ymd(2024, 2, 10), 40), ymd(2024, 1, 1));
}

#[test]
fn test_add_field_months_clamps_day() {
    let end_of_january = at(ymd(2024, 1, 31), 8, 0, 0);
    let shifted = add_field(end_of_january, DateField::Months, 1);
    assert_eq!(shifted, at(ymd(2024, 2, 29), 8, 0, 0));

    let back = add_field(end_of_january, DateField::Months, -2);
    assert_eq!(back, at(ymd(2023, 11, 30), 8, 0, 0));
}

#[test]
fn test_add_field_years_clamps_leap_day() {
    let leap_day = at(ymd(2024, 2, 29), 0, 0, 0);
    assert_eq!(add_field(leap_day, DateField::Years, 1), at(ymd(2025, 2, 28), 0, 0, 0));
}

#[test]
fn test_add_field_small_units() {
    let late = at(ymd(2024, 1, 1), 23, 0, 0);
    assert_eq!(add_field(late, DateField::Hours, 2), at(ymd(2024, 1, 2), 1, 0, 0));
    assert_eq!(add_field(late, DateField::Weeks, 1), at(ymd(2024, 1, 8), 23, 0, 0));
    assert_eq!(add_field(late, DateField::Minutes, 90), at(ymd(2024, 1, 2), 0, 30, 0));
    assert_eq!(add_field(late, DateField::Seconds, -60), at(ymd(2024, 1, 1), 22, 59, 0));
}

#[test]
fn test_day_bounds() {
    let date = ymd(2024, 3, 31);
    assert_eq!(start_of_day(date).time(), NaiveTime::MIN);
    assert_eq!(
        end_of_day(date).time(),
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap()
    );
    assert_eq!(end_of_day(date).date(), date);
}

#[test]
fn test_start_of_month() {
    assert_eq!(start_of_month(ymd(2024, 5, 15)), at(ymd(2024, 5, 1), 0, 0, 0));
}

#[test]
fn test_trailing_week_is_newest_first() {
    let days = trailing_week(ymd(2024, 5, 15));
    assert_eq!(days.len(), 7);
    assert_eq!(days[0], ymd(2024, 5, 14));
    assert_eq!(days[6], ymd(2024, 5, 8));
}

#[test]
fn test_trailing_week_before() {
    let days = trailing_week_before(ymd(2024, 5, 15));
    assert_eq!(days[0], ymd(2024, 5, 7));
    assert_eq!(days[6], ymd(2024, 5, 1));
}

#[test]
fn test_trailing_week_last_month_skips_missing_days() {
    // The window covers Apr 1 and Mar 26-31; Feb 30 and 31 do not exist
    let days = trailing_week_last_month(ymd(2024, 4, 2));
    assert_eq!(days.len(), 5);
    assert!(days.contains(&ymd(2024, 3, 1)));
    assert!(days.contains(&ymd(2024, 2, 29)));
    assert!(days.contains(&ymd(2024, 2, 26)));
}
