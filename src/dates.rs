//! Calendar-month arithmetic used by the batch sweeps

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

/// Whole-month difference between two instants at calendar-month granularity.
///
/// Day-of-month and partial months are ignored: the result is
/// `(to.year - from.year) * 12 + (to.month - from.month)`.
pub fn month_diff(from: DateTime<Utc>, to: DateTime<Utc>) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}

/// Render a timestamp the way the API exposes it: ISO-8601 with millisecond
/// precision and a `Z` suffix, e.g. `2020-02-18T12:43:42.067Z`.
pub fn to_iso_string(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    #[test]
    fn same_instant_is_zero_months() {
        assert_eq!(month_diff(date(2020, 1, 13), date(2020, 1, 13)), 0);
    }

    #[test]
    fn months_within_a_year() {
        assert_eq!(month_diff(date(2020, 1, 13), date(2020, 5, 13)), 4);
    }

    #[test]
    fn full_year_is_twelve_months() {
        assert_eq!(month_diff(date(2019, 1, 13), date(2020, 1, 13)), 12);
    }

    #[test]
    fn eighteen_months_across_year_boundary() {
        assert_eq!(month_diff(date(2019, 1, 13), date(2020, 7, 13)), 18);
    }

    #[test]
    fn day_of_month_is_ignored() {
        // Not a full elapsed month, but one calendar month apart.
        assert_eq!(month_diff(date(2020, 1, 31), date(2020, 2, 1)), 1);
    }

    #[test]
    fn iso_string_uses_millisecond_precision() {
        let instant = Utc
            .with_ymd_and_hms(2020, 2, 18, 12, 43, 42)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(67))
            .unwrap();
        assert_eq!(to_iso_string(instant), "2020-02-18T12:43:42.067Z");
    }
}
