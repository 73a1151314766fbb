//! Calendar date helpers shared by the todo.txt and Org mode converters.
//!
//! Both formats write dates as `YYYY-MM-DD`. Parsing is strict: the token
//! must be exactly ten characters, zero padded, and name a real calendar
//! day. Anything else is simply "not a date" and never an error.
//!
//! ```rust
//! use todo2org::libs::date::{format_date, parse_date};
//!
//! let date = parse_date("2018-12-10").unwrap();
//! assert_eq!(format_date(&date), "2018-12-10");
//! assert!(parse_date("2019-13-40").is_none());
//! assert!(parse_date("2018-1-5").is_none());
//! ```

use chrono::NaiveDate;

/// Format used for every date token in both directions.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` token, returning `None` when it is not a valid date.
///
/// chrono accepts unpadded fields such as `2018-1-5`, so the shape of the
/// token is checked first.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 {
        return None;
    }

    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Renders a date as `YYYY-MM-DD`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(parse_date("2018-12-12"), NaiveDate::from_ymd_opt(2018, 12, 12));
        assert_eq!(parse_date("2020-02-29"), NaiveDate::from_ymd_opt(2020, 2, 29));
    }

    #[test]
    fn test_parse_date_rejects_impossible_calendar_values() {
        assert!(parse_date("2019-13-40").is_none());
        assert!(parse_date("2019-02-29").is_none());
        assert!(parse_date("2018-04-31").is_none());
    }

    #[test]
    fn test_parse_date_rejects_other_shapes() {
        assert!(parse_date("").is_none());
        assert!(parse_date("2018-1-05").is_none());
        assert!(parse_date("2018/12/12").is_none());
        assert!(parse_date("12-12-2018").is_none());
        assert!(parse_date("2018-12-12T10").is_none());
        assert!(parse_date("walk").is_none());
    }

    #[test]
    fn test_format_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2018, 1, 5).unwrap();
        assert_eq!(format_date(&date), "2018-01-05");
    }
}
