use chrono::NaiveDate;

use crate::consts::{DATE_FORMAT, REPORT_DATE_FORMAT};

/// Parse a data-file date in day-month-year order ("15.06.2023")
pub(crate) fn parse_report_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), REPORT_DATE_FORMAT).ok()
}

/// Parse a tracker date ("2023-06-15")
pub(crate) fn parse_tracker_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub(crate) fn format_tracker_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
