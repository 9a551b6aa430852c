use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// English ordinal suffix for a day of the month.
pub fn ordinal(n: u32) -> &'static str {
    let m = n % 10;
    if m == 1 && n != 11 {
        "st"
    } else if m == 2 && n != 12 {
        "nd"
    } else if m == 3 && n != 13 {
        "rd"
    } else {
        "th"
    }
}

/// "19th Oct"
pub fn day_label(d: NaiveDate) -> String {
    format!("{}{} {}", d.day(), ordinal(d.day()), d.format("%b"))
}

/// "Week 42 of 2026" (ISO week numbering)
pub fn week_label(d: NaiveDate) -> String {
    let w = d.iso_week();
    format!("Week {:02} of {}", w.week(), w.year())
}

/// "Oct 2026"
pub fn month_label(d: NaiveDate) -> String {
    d.format("%b %Y").to_string()
}
