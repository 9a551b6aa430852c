//! Day / week / month windows as inclusive Unix-second ranges.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Inclusive `[start, end]` range of Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: i64,
    pub end: i64,
}

impl Window {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, ts: i64) -> bool {
        ts >= self.start && ts <= self.end
    }

    /// 00:00:00 to 23:59:59 of `date`.
    pub fn day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> AppResult<Self> {
        Self::between_days(tz, date, date)
    }

    /// Monday 00:00:00 to Sunday 23:59:59 of the week holding `date`.
    pub fn week<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> AppResult<Self> {
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        let sunday = monday + Duration::days(6);
        Self::between_days(tz, monday, sunday)
    }

    /// First day 00:00:00 to last day 23:59:59 of the month holding `date`.
    pub fn month<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> AppResult<Self> {
        let first = date
            .with_day(1)
            .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let next_first = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        }
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let last = next_first
            .pred_opt()
            .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        Self::between_days(tz, first, last)
    }

    fn between_days<Tz: TimeZone>(tz: &Tz, first: NaiveDate, last: NaiveDate) -> AppResult<Self> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)
            .ok_or_else(|| AppError::InvalidDate(last.to_string()))?;
        Ok(Self {
            start: local_timestamp(tz, first.and_time(NaiveTime::MIN))?,
            end: local_timestamp(tz, last.and_time(end_of_day))?,
        })
    }
}

/// Wall-clock time in `tz` to Unix seconds. Ambiguous times (DST fold) take
/// the earlier instant; times that never happen (DST gap) are an error.
fn local_timestamp<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> AppResult<i64> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| AppError::InvalidDate(naive.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ts(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, mi, s).unwrap().timestamp()
    }

    #[test]
    fn day_window() {
        let w = Window::day(&Utc, ymd(2026, 10, 19)).unwrap();
        assert_eq!(w.start, ts(2026, 10, 19, 0, 0, 0));
        assert_eq!(w.end, ts(2026, 10, 19, 23, 59, 59));
        assert!(w.contains(w.start));
        assert!(w.contains(w.end));
        assert!(!w.contains(w.end + 1));
    }

    #[test]
    fn week_runs_monday_to_sunday() {
        // Thursday
        let w = Window::week(&Utc, ymd(2026, 10, 22)).unwrap();
        assert_eq!(w.start, ts(2026, 10, 19, 0, 0, 0));
        assert_eq!(w.end, ts(2026, 10, 25, 23, 59, 59));

        // Sunday belongs to the week that started six days earlier.
        let w = Window::week(&Utc, ymd(2026, 10, 25)).unwrap();
        assert_eq!(w.start, ts(2026, 10, 19, 0, 0, 0));
    }

    #[test]
    fn month_windows_handle_length_and_year_end() {
        let feb = Window::month(&Utc, ymd(2028, 2, 10)).unwrap();
        assert_eq!(feb.start, ts(2028, 2, 1, 0, 0, 0));
        assert_eq!(feb.end, ts(2028, 2, 29, 23, 59, 59));

        let dec = Window::month(&Utc, ymd(2026, 12, 31)).unwrap();
        assert_eq!(dec.start, ts(2026, 12, 1, 0, 0, 0));
        assert_eq!(dec.end, ts(2026, 12, 31, 23, 59, 59));
    }
}
