use chrono::{Days, Local, NaiveDate};

/// How far into the future the cursor may be moved, in days
pub const MAX_DAYS_AHEAD: u64 = 7;

/// The calendar date whose scores are being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCursor {
    date: NaiveDate,
}

impl DateCursor {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn today() -> Self {
        Self::new(local_today())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Shift the held date by a signed number of days
    pub fn advance(&mut self, days: i64) {
        let shifted = if days >= 0 {
            self.date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        // Only fails at the edges of chrono's representable range
        if let Some(date) = shifted {
            self.date = date;
        }
    }

    /// Date in the `YYYYMMDD` form used by the `dates` query parameter
    pub fn to_api_key(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    /// Short human label, e.g. `Mon, Oct 19, 2026`
    pub fn to_display_label(&self) -> String {
        self.date.format("%a, %b %-d, %Y").to_string()
    }

    pub fn is_today(&self) -> bool {
        self.date == local_today()
    }

    /// True when forward navigation should be disabled
    pub fn is_at_or_beyond_max(&self) -> bool {
        self.is_at_or_beyond_max_from(local_today())
    }

    pub fn is_at_or_beyond_max_from(&self, today: NaiveDate) -> bool {
        match today.checked_add_days(Days::new(MAX_DAYS_AHEAD)) {
            Some(max) => self.date >= max,
            None => true,
        }
    }
}

impl Default for DateCursor {
    fn default() -> Self {
        Self::today()
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_advance_forward_then_back_restores_date() {
        let mut cursor = DateCursor::new(date(2024, 2, 28));
        cursor.advance(1);
        assert_eq!(cursor.date(), date(2024, 2, 29));
        cursor.advance(-1);
        assert_eq!(cursor.date(), date(2024, 2, 28));
    }

    #[test]
    fn test_advance_crosses_year_boundary() {
        let mut cursor = DateCursor::new(date(2024, 12, 31));
        cursor.advance(1);
        assert_eq!(cursor.date(), date(2025, 1, 1));
        cursor.advance(-3);
        assert_eq!(cursor.date(), date(2024, 12, 29));
    }

    #[test]
    fn test_api_key_is_zero_padded() {
        assert_eq!(DateCursor::new(date(2025, 3, 7)).to_api_key(), "20250307");
        assert_eq!(DateCursor::new(date(2024, 11, 21)).to_api_key(), "20241121");
    }

    #[test]
    fn test_display_label() {
        assert_eq!(DateCursor::new(date(2026, 10, 19)).to_display_label(), "Mon, Oct 19, 2026");
        assert_eq!(DateCursor::new(date(2025, 3, 7)).to_display_label(), "Fri, Mar 7, 2025");
    }

    #[test]
    fn test_max_bound_for_fixed_today() {
        for today in [date(2024, 1, 1), date(2024, 2, 26), date(2025, 12, 28)] {
            let mut cursor = DateCursor::new(today);
            assert!(!cursor.is_at_or_beyond_max_from(today));
            cursor.advance(6);
            assert!(!cursor.is_at_or_beyond_max_from(today));
            cursor.advance(1);
            assert!(cursor.is_at_or_beyond_max_from(today));
            cursor.advance(5);
            assert!(cursor.is_at_or_beyond_max_from(today));
        }
    }

    #[test]
    fn test_past_dates_are_never_at_max() {
        let today = date(2024, 6, 15);
        let cursor = DateCursor::new(date(2023, 6, 15));
        assert!(!cursor.is_at_or_beyond_max_from(today));
    }

    #[test]
    fn test_today_cursor() {
        let cursor = DateCursor::today();
        assert!(cursor.is_today());
        assert!(!cursor.is_at_or_beyond_max());
    }
}
