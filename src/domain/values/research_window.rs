use chrono::{Months, NaiveDate, Utc};
use serde::Serialize;

/// Trailing window of calendar days (UTC) the price history covers.
///
/// Downstream content collaborators search from the same `start_date()`,
/// so charts and commentary line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResearchWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ResearchWindow {
    /// Window of `months` calendar months ending on `end`.
    pub fn trailing_months(end: NaiveDate, months: u32) -> Self {
        let start = end
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Window of `months` calendar months ending today.
    pub fn ending_today(months: u32) -> Self {
        Self::trailing_months(Utc::now().date_naive(), months)
    }

    /// UNIX seconds at 00:00:00 UTC on the first day.
    pub fn start_timestamp(&self) -> i64 {
        self.start
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or(0)
    }

    /// UNIX seconds at 23:59:59 UTC on the last day.
    pub fn end_timestamp(&self) -> i64 {
        self.end
            .and_hms_opt(23, 59, 59)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or_else(|| self.start_timestamp())
    }

    pub fn start_date(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }
}
