//! Free-text date-range parsing.
//!
//! Ranges come in as `"<start> – <end>"` with an en-dash separator and an
//! optional end. A token matching "present" means today; a missing or
//! unreadable token falls back to the 1 Jan 1900 sentinel.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

/// Fixed fallback instant for missing date tokens.
pub fn sentinel() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid sentinel date")
}

/// A parsed date range with its calendar-month tenure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,

    /// Calendar-month difference between start and end, not elapsed days.
    pub months: i32,

    /// Whitespace-normalized raw text.
    pub range_text: String,
}

/// Parse a raw en-dash-separated date range.
pub fn parse_range(raw: &str) -> DateRange {
    let (start_token, end_token) = match raw.split_once('–') {
        Some((a, b)) => (a.trim(), b.trim()),
        None => (raw.trim(), ""),
    };

    let start = parse_token(start_token);
    let end = parse_token(end_token);
    let months = (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);

    DateRange {
        start,
        end,
        months,
        range_text: normalize_whitespace(raw),
    }
}

fn parse_token(token: &str) -> NaiveDate {
    if token.is_empty() {
        return sentinel();
    }
    if token.to_lowercase().contains("present") {
        return Utc::now().date_naive();
    }
    full_date(token)
        .or_else(|| month_year(token))
        .or_else(|| year_only(token))
        .unwrap_or_else(sentinel)
}

fn full_date(token: &str) -> Option<NaiveDate> {
    ["%e %b %Y", "%e %B %Y", "%b %e, %Y", "%B %e, %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

fn month_year(token: &str) -> Option<NaiveDate> {
    // "Jan 2019" has no day component; anchor it to the first.
    let anchored = format!("1 {token}");
    ["%e %b %Y", "%e %B %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&anchored, fmt).ok())
}

fn year_only(token: &str) -> Option<NaiveDate> {
    if token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()) {
        NaiveDate::from_ymd_opt(token.parse().ok()?, 1, 1)
    } else {
        None
    }
}

fn normalize_whitespace(s: &str) -> String {
    static WS: OnceLock<Regex> = OnceLock::new();
    let ws = WS.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"));
    ws.replace_all(s, " ").trim().to_string()
}
