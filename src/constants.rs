//! Pattern constants and fixed-size units used throughout the library.
//!
//! Patterns are chrono strftime strings. They are the only configuration the
//! library carries; everything else is computed per call.

/// Full date-time, e.g. `2024-05-15 10:30:45`
pub const FORMAT_FULL: &str = "%Y-%m-%d %H:%M:%S";

/// Date only, e.g. `2024-05-15`
pub const FORMAT_YMD: &str = "%Y-%m-%d";

/// Year and month, e.g. `2024-05`
pub const FORMAT_YM: &str = "%Y-%m";

/// Year only, e.g. `2024`
pub const FORMAT_Y: &str = "%Y";

/// Time of day, e.g. `10:30:45`
pub const FORMAT_HMS: &str = "%H:%M:%S";

/// Time of day to the minute, e.g. `10:30`
pub const FORMAT_HM: &str = "%H:%M";

/// Date-time to the minute, e.g. `2024-05-15 10:30`
pub const FORMAT_YMDHM: &str = "%Y-%m-%d %H:%M";

/// Compact date-time, e.g. `20240515103045`
pub const FORMAT_COMPACT_FULL: &str = "%Y%m%d%H%M%S";

/// Compact date, e.g. `20240515`
pub const FORMAT_COMPACT_YMD: &str = "%Y%m%d";

/// Compact year-month, e.g. `202405`
pub const FORMAT_COMPACT_YM: &str = "%Y%m";

/// ISO-8601 date-time with milliseconds and offset, e.g.
/// `2012-05-25T14:59:38.237-07:00`
pub const FORMAT_ISO: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Milliseconds in a fixed-length day. Interval arithmetic divides by this
/// constant and ignores daylight-saving transitions on purpose.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Days in a week.
pub const WEEK_DAYS: u32 = 7;

/// Rendered length of a [`FORMAT_YMDHM`] string (`2024-05-15 10:30`).
pub const MINUTE_PRECISION_LEN: usize = 16;
