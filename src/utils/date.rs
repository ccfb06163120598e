//! Date display formatting
//!
//! Pure functions for turning calendar dates into the strings shown in the
//! inspection UI: the day-first display form, the ISO-8601 form used as a
//! sortable grouping key, and a calendar-day equality check.

use chrono::Datelike;

/// Zero-pads a day or month value to two digits
///
/// # Arguments
/// - `n` - The value to pad (day or month, 0-99 in practice)
///
/// # Returns
/// "03" for 3, "12" for 12. Values of 100 or more render unpadded.
pub fn pad2(n: u32) -> String {
    format!("{:02}", n)
}

/// Formats a date for display as "DD.MM.YYYY"
///
/// Day-first convention used everywhere a date is shown to the user. Day
/// and month are zero-padded to two digits, the year is rendered as-is.
/// Time-of-day, if the value carries one, is ignored.
///
/// # Arguments
/// - `date` - Any calendar value with year/month/day accessors
pub fn format_display_date<D: Datelike>(date: &D) -> String {
    format!("{}.{}.{}", pad2(date.day()), pad2(date.month()), date.year())
}

/// Formats a date as ISO-8601 "YYYY-MM-DD"
///
/// Year-first form that sorts lexicographically in date order, used for
/// machine-facing contexts such as report grouping keys.
///
/// # Arguments
/// - `date` - Any calendar value with year/month/day accessors
pub fn format_iso_date<D: Datelike>(date: &D) -> String {
    format!("{}-{}-{}", date.year(), pad2(date.month()), pad2(date.day()))
}

/// Checks whether two dates fall on the same calendar day
///
/// True iff year, month, and day-of-month all match. Time-of-day on either
/// value is ignored, so a morning and an evening timestamp of the same day
/// compare equal.
pub fn is_same_calendar_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_pad2_pads_single_digits() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(3), "03");
        assert_eq!(pad2(9), "09");
    }

    #[test]
    fn test_pad2_leaves_two_digits_unchanged() {
        assert_eq!(pad2(10), "10");
        assert_eq!(pad2(99), "99");
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_display_date(&date), "05.03.2024");
    }

    #[test]
    fn test_format_display_date_no_padding_needed() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(format_display_date(&date), "31.12.2023");
    }

    #[test]
    fn test_format_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_iso_date(&date), "2024-03-05");
    }

    #[test]
    fn test_iso_date_sorts_lexicographically() {
        let earlier = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        assert!(format_iso_date(&earlier) < format_iso_date(&later));
    }

    #[test]
    fn test_same_calendar_day_ignores_time() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let morning = date.and_hms_opt(8, 0, 0).unwrap();
        let evening = date.and_hms_opt(23, 59, 59).unwrap();
        assert!(is_same_calendar_day(&morning, &evening));
    }

    #[test]
    fn test_same_calendar_day_rejects_field_differences() {
        let base = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let other_day = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let other_month = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap();
        let other_year = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();

        assert!(is_same_calendar_day(&base, &base));
        assert!(!is_same_calendar_day(&base, &other_day));
        assert!(!is_same_calendar_day(&base, &other_month));
        assert!(!is_same_calendar_day(&base, &other_year));
    }
}
