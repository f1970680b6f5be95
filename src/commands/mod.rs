pub mod boxscore;
pub mod scores;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::date_cursor::DateCursor;

/// Parse optional date string, defaulting to today
///
/// Accepts dates in YYYY-MM-DD format. If no date is provided, returns today's date.
/// Returns an error if the date string is malformed.
pub fn parse_date(date: Option<String>) -> Result<DateCursor> {
    if let Some(date_str) = date {
        let parsed_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))?;
        Ok(DateCursor::new(parsed_date))
    } else {
        Ok(DateCursor::today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let cursor = parse_date(Some("2024-11-20".to_string())).unwrap();
        assert_eq!(cursor.to_api_key(), "20241120");
    }

    #[test]
    fn test_parse_date_defaults_to_today() {
        assert!(parse_date(None).unwrap().is_today());
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        let err = parse_date(Some("11/20/2024".to_string())).unwrap_err();
        assert!(err.to_string().contains("Use YYYY-MM-DD"));
    }
}
