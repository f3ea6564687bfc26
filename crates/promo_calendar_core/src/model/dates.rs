//! Local calendar-date helpers.
//!
//! Dates are plain `NaiveDate` values. Conversions read the date's own
//! year/month/day and never pass through UTC.

use chrono::{Datelike, Local, NaiveDate};

const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats `date` as zero-padded `YYYY-MM-DD`.
pub fn local_date_str(date: NaiveDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_local_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), LOCAL_DATE_FORMAT)
}

/// Returns today's date in the process-local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

#[cfg(test)]
mod tests {
    use super::{days_between, local_date_str, parse_local_date};
    use chrono::NaiveDate;

    #[test]
    fn local_date_str_zero_pads_components() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(local_date_str(date), "2024-03-09");
    }

    #[test]
    fn parse_rejects_non_iso_input() {
        assert!(parse_local_date("09/03/2024").is_err());
        assert_eq!(
            parse_local_date(" 2024-03-09 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
    }

    #[test]
    fn days_between_crosses_year_boundary() {
        let from = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(days_between(from, to), 2);
        assert_eq!(days_between(to, from), -2);
    }
}
