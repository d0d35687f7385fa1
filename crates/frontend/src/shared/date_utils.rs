/// Utilities for date formatting and parsing around the filter controls
///
/// `<input type="date">` speaks "YYYY-MM-DD"; these helpers convert
/// between that and `chrono::NaiveDate`.
use chrono::NaiveDate;

/// Format a date as "YYYY-MM-DD", the value a date input expects.
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date input value ("YYYY-MM-DD"). Blank or malformed input
/// yields `None`.
pub fn parse_input_value(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_input_value_round_trip() {
        let date = day(2024, 12, 31);
        assert_eq!(to_input_value(date), "2024-12-31");
        assert_eq!(parse_input_value("2024-12-31"), Some(date));
    }

    #[test]
    fn test_parse_input_value_invalid() {
        assert_eq!(parse_input_value(""), None);
        assert_eq!(parse_input_value("31/12/2024"), None);
        assert_eq!(parse_input_value("2024-13-01"), None);
    }
}
