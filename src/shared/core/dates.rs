// Date vocabulary shared by every context.
//
// Stored records carry timestamps as `YYYY-MM-DD HH:MM:SS` strings and
// day-resolution dates as `YYYY-MM-DD`. Reports display both as `DD/MM/YYYY`,
// falling back to a fixed sentinel when the source value does not parse.

use chrono::{NaiveDate, NaiveDateTime};

/// Placeholder shown when a record has no parsable date.
pub const NO_DATE: &str = "no date";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// `DD/MM/YYYY`, or the "no date" sentinel.
pub fn display_date(parsed: Option<NaiveDate>) -> String {
    match parsed {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => NO_DATE.to_string(),
    }
}
