//! Date formatting for display, e.g. profile join dates and challenge
//! creation dates.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Formats a timestamp as `"<Month> <day>, <year>"` in the timestamp's own
/// time zone, e.g. `"October 19, 2026"`.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_date_long_month() {
        let date = Utc.with_ymd_and_hms(2026, 10, 19, 13, 37, 0).unwrap();
        assert_eq!(format_date(&date), "October 19, 2026");
    }

    #[test]
    fn test_format_date_single_digit_day() {
        let date = Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date), "January 5, 2025");
    }

    #[test]
    fn test_format_date_uses_own_offset() {
        // 23:30 on Dec 31 at UTC-5 is already Jan 1 in UTC.
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let date = offset.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap();
        assert_eq!(format_date(&date), "December 31, 2024");
        assert_eq!(format_date(&date.with_timezone(&Utc)), "January 1, 2025");
    }
}
