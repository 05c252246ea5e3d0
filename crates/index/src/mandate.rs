//! Mandate date parsing.
//!
//! Stored dates look like `DD/MM/YYYY`. Anything else maps to
//! [`SENTINEL_DATE`] so that grouping can sort without ever failing; malformed
//! entries end up before every valid one. Well-formed values that name no
//! calendar day roll over the way a calendar would (`31/02/1990` is
//! 3 March 1990, `00/01/1990` is 31 December 1989).

use chrono::{Months, NaiveDate, TimeDelta};
use tracing::trace;

/// Stand-in for dates that cannot be parsed. Sorts before every valid date.
pub const SENTINEL_DATE: NaiveDate = NaiveDate::MIN;

/// Parses a `DD/MM/YYYY` mandate date.
///
/// Each component may carry surrounding whitespace but must otherwise be
/// ASCII digits. Wrong separator count, empty or non-numeric components, or a
/// missing value yield [`SENTINEL_DATE`]. Day and month overflow roll into the
/// following month or year; zero rolls back. Only a result outside chrono's
/// date range falls back to the sentinel.
pub fn parse_mandate_date(raw: Option<&str>) -> NaiveDate {
    match raw.and_then(parse_components) {
        Some(date) => date,
        None => {
            trace!(raw = ?raw, "mandate_date_unparsed");
            SENTINEL_DATE
        }
    }
}

fn parse_components(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('/');
    let day = numeric(parts.next()?)?;
    let month = numeric(parts.next()?)?;
    let year = numeric(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    rollover(i32::try_from(year).ok()?, month, day)
}

/// Month 1 day 1 of `year`, shifted by `month - 1` months and `day - 1` days.
fn rollover(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let start = match month.checked_sub(1) {
        Some(offset) => start.checked_add_months(Months::new(offset))?,
        None => start.checked_sub_months(Months::new(1))?,
    };
    let days = TimeDelta::try_days(i64::from(day) - 1)?;
    start.checked_add_signed(days)
}

fn numeric(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(parse_mandate_date(Some("03/11/1930")), ymd(1930, 11, 3));
        assert_eq!(parse_mandate_date(Some("31/01/1951")), ymd(1951, 1, 31));
        assert_eq!(parse_mandate_date(Some(" 1/1/2023 ")), ymd(2023, 1, 1));
    }

    #[test]
    fn malformed_values_fall_back_to_sentinel() {
        for raw in [
            "invalid",
            "",
            "03-11-1930",
            "03/11",
            "03/11/1930/1",
            "aa/11/1930",
            "03//1930",
            "-3/11/1930",
            "03/11/+1930",
        ] {
            assert_eq!(parse_mandate_date(Some(raw)), SENTINEL_DATE, "{raw:?}");
        }
        assert_eq!(parse_mandate_date(None), SENTINEL_DATE);
    }

    #[test]
    fn out_of_range_components_roll_over() {
        assert_eq!(parse_mandate_date(Some("31/02/1990")), ymd(1990, 3, 3));
        assert_eq!(parse_mandate_date(Some("00/01/1990")), ymd(1989, 12, 31));
        assert_eq!(parse_mandate_date(Some("15/00/1990")), ymd(1989, 12, 15));
        assert_eq!(parse_mandate_date(Some("01/13/1990")), ymd(1991, 1, 1));
        assert_eq!(parse_mandate_date(Some("29/02/2024")), ymd(2024, 2, 29));
        assert_eq!(parse_mandate_date(Some("29/02/2023")), ymd(2023, 3, 1));
    }

    #[test]
    fn dates_beyond_chrono_range_fall_back_to_sentinel() {
        assert_eq!(parse_mandate_date(Some("01/01/999999")), SENTINEL_DATE);
        assert_eq!(parse_mandate_date(Some("01/4000000000/2000")), SENTINEL_DATE);
    }

    #[test]
    fn sentinel_sorts_before_valid_dates() {
        assert!(SENTINEL_DATE < ymd(1, 1, 1));
        assert!(SENTINEL_DATE < parse_mandate_date(Some("15/11/1889")));
    }
}
