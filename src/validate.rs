//! Shape-only validation of date strings.
//!
//! These helpers check that a string *looks like* a date; they do not check
//! calendar validity (`2024-2-31` passes the year-month-day shape). Use the
//! parsers in [`crate::format`] when a real date is required.

use once_cell::sync::Lazy;
use regex::Regex;

static YMD_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").unwrap());
static YM_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{1,2}$").unwrap());
static YEAR_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").unwrap());

/// Whether `s` has the `yyyy-MM-dd` shape (one- or two-digit month and day).
pub fn is_year_month_day(s: &str) -> bool {
    YMD_SHAPE.is_match(s)
}

/// Whether `s` has the `yyyy-MM` shape.
pub fn is_year_month(s: &str) -> bool {
    YM_SHAPE.is_match(s)
}

/// Whether `s` has the `yyyy` shape.
pub fn is_year(s: &str) -> bool {
    YEAR_SHAPE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_accept_short_fields() {
        assert!(is_year_month_day("2024-5-3"));
        assert!(is_year_month("2024-5"));
        assert!(is_year("2024"));
    }

    #[test]
    fn shapes_reject_empty_and_noise() {
        assert!(!is_year_month_day(""));
        assert!(!is_year_month_day("2024-05-15 10:00"));
        assert!(!is_year_month("202405"));
        assert!(!is_year("24"));
    }

    #[test]
    fn shape_is_not_calendar_validity() {
        // Shape checks stop at the digit layout.
        assert!(is_year_month_day("2024-2-31"));
        assert!(is_year_month("2024-99"));
    }
}
