//! Work targets and worked/left figures.

use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_left};
use crate::utils::formatting::format_hm;
use crate::utils::time::seconds_to_hours_minutes;
use chrono::Duration;

/// Month target as configured; a week is a quarter of it and a day a fifth of
/// a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    pub month: Duration,
    pub week: Duration,
    pub day: Duration,
}

impl Targets {
    pub fn from_monthly(month: Duration) -> Self {
        let week = month / 4;
        let day = week / 5;
        Self { month, week, day }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub worked: Duration,
    pub target: Duration,
}

impl Progress {
    pub fn new(worked: Duration, target: Duration) -> Self {
        Self { worked, target }
    }

    /// Remaining time; negative once the target has been exceeded.
    pub fn left(&self) -> Duration {
        self.target - self.worked
    }

    pub fn is_overtime(&self) -> bool {
        self.worked > self.target
    }

    pub fn worked_text(&self, fmt: &str) -> AppResult<String> {
        format_duration(fmt, self.worked)
    }

    /// "left" rendered with the short pattern; overtime gets a leading `-`.
    pub fn left_text(&self, fmt: &str) -> AppResult<String> {
        let left = self.left();
        let body = format_duration(fmt, left.abs())?;
        let text = if left < Duration::zero() {
            format!("-{body}")
        } else {
            body
        };
        Ok(format!("{}{}{}", color_for_left(left.num_seconds()), text, RESET))
    }
}

/// `(hours, minutes)` of a non-negative duration through a printf pattern.
pub fn format_duration(fmt: &str, d: Duration) -> AppResult<String> {
    format_hm(fmt, seconds_to_hours_minutes(d.num_seconds()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::colors::{GREEN, RED};

    #[test]
    fn targets_split_month_into_weeks_and_days() {
        let t = Targets::from_monthly(Duration::hours(160));
        assert_eq!(t.week, Duration::hours(40));
        assert_eq!(t.day, Duration::hours(8));
    }

    #[test]
    fn remaining_and_overtime() {
        let p = Progress::new(Duration::hours(7), Duration::hours(8));
        assert!(!p.is_overtime());
        assert_eq!(p.left_text("%02d:%02d").unwrap(), format!("{GREEN}01:00{RESET}"));

        let p = Progress::new(Duration::minutes(9 * 60 + 30), Duration::hours(8));
        assert!(p.is_overtime());
        assert_eq!(p.left_text("%02d:%02d").unwrap(), format!("{RED}-01:30{RESET}"));
        assert_eq!(p.worked_text("%02d:%02d").unwrap(), "09:30");
    }
}
