use chrono::{Local, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_str() -> String {
    today().format(DATE_FMT).to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Next calendar day. `None` only at the end of the supported calendar.
pub fn next_day(d: NaiveDate) -> Option<NaiveDate> {
    d.succ_opt()
}

/// Next calendar day of an ISO "YYYY-MM-DD" string.
/// `None` when the input does not parse as a date.
pub fn next_day_str(s: &str) -> Option<String> {
    parse_date(s).and_then(next_day).map(format_date)
}

/// Current local timestamp in ISO8601 / RFC3339, the format every
/// record-level `created_at` / `updated_at` uses.
pub fn now_rfc3339() -> String {
    Local::now().to_rfc3339()
}

/// Short clock label used for generated draft names.
pub fn now_clock_label() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
