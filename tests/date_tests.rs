use servicelogger::utils::date::{next_day_str, parse_date, today_str};

#[test]
fn next_day_crosses_month_boundary() {
    assert_eq!(next_day_str("2024-01-31"), Some("2024-02-01".to_string()));
}

#[test]
fn next_day_handles_leap_year_february() {
    assert_eq!(next_day_str("2024-02-28"), Some("2024-02-29".to_string()));
    assert_eq!(next_day_str("2024-02-29"), Some("2024-03-01".to_string()));
}

#[test]
fn next_day_crosses_year_boundary() {
    assert_eq!(next_day_str("2023-12-31"), Some("2024-01-01".to_string()));
}

#[test]
fn next_day_is_deterministic() {
    assert_eq!(next_day_str("2024-03-01"), next_day_str("2024-03-01"));
}

#[test]
fn next_day_rejects_garbage() {
    assert_eq!(next_day_str(""), None);
    assert_eq!(next_day_str("not-a-date"), None);
    assert_eq!(next_day_str("2024-13-01"), None);
}

#[test]
fn parse_date_accepts_iso_only() {
    assert!(parse_date("2024-06-15").is_some());
    assert!(parse_date("15/06/2024").is_none());
}

#[test]
fn today_str_parses_back() {
    assert!(parse_date(&today_str()).is_some());
}
