//! Time utilities: seconds ⇄ hours/minutes, timestamp rendering.

use crate::errors::{AppError, AppResult};
use chrono::{Local, TimeZone};
use std::fmt::Write;

/// Split seconds into whole hours and minutes.
///
/// The remainder is rounded to the nearest minute (half up); a rounded 60 is
/// carried into the hours so "60" minutes is never displayed.
pub fn seconds_to_hours_minutes(secs: i64) -> (i64, i64) {
    let mut h = secs.div_euclid(3600);
    let rem = secs.rem_euclid(3600);
    let mut m = (rem + 30) / 60;
    if m == 60 {
        m = 0;
        h += 1;
    }
    (h, m)
}

/// Largest span, in seconds, a `chrono::Duration` can hold.
pub const MAX_DURATION_SECS: i64 = i64::MAX / 1_000;

/// `round(h * 3600 + m * 60)`, inputs taken as decimal text like the option
/// table stores them.
///
/// Non-finite values and totals beyond what a `Duration` can hold are
/// rejected as invalid options.
pub fn hours_minutes_to_seconds(hours: &str, minutes: &str) -> AppResult<i64> {
    let invalid = |option: &str, v: &str| AppError::InvalidOption {
        option: option.to_string(),
        value: v.to_string(),
    };
    let parse = |option: &str, v: &str, unit: f64| -> AppResult<f64> {
        let secs = v.trim().parse::<f64>().map_err(|_| invalid(option, v))? * unit;
        if !secs.is_finite() || secs.abs() > MAX_DURATION_SECS as f64 {
            return Err(invalid(option, v));
        }
        Ok(secs)
    };
    let h = parse("hours", hours, 3600.0)?;
    let m = parse("minutes", minutes, 60.0)?;

    let total = (h + m).round();
    if total.abs() > MAX_DURATION_SECS as f64 {
        return Err(invalid("hours", hours));
    }
    Ok(total as i64)
}

/// Render a Unix timestamp in local time with a strftime pattern.
pub fn format_timestamp(ts: i64, fmt: &str) -> AppResult<String> {
    let dt = Local
        .timestamp_opt(ts, 0)
        .single()
        .ok_or_else(|| AppError::InvalidDate(ts.to_string()))?;
    format_datetime(&dt, fmt)
}

/// `write!` rather than `to_string()`: chrono reports a bad pattern as a
/// formatter error, which `to_string()` would turn into a panic.
pub fn format_datetime<Tz>(dt: &chrono::DateTime<Tz>, fmt: &str) -> AppResult<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", dt.format(fmt)).map_err(|_| AppError::InvalidFormat(fmt.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn whole_hour() {
        assert_eq!(seconds_to_hours_minutes(3600), (1, 0));
    }

    #[test]
    fn sixty_minutes_carry_into_hour() {
        // 59m59s rounds to 60 minutes before the carry
        assert_eq!(seconds_to_hours_minutes(3599), (1, 0));
        assert_eq!(seconds_to_hours_minutes(7170), (2, 0));
    }

    #[test]
    fn rounding_to_nearest_minute() {
        assert_eq!(seconds_to_hours_minutes(0), (0, 0));
        assert_eq!(seconds_to_hours_minutes(89), (0, 1));
        assert_eq!(seconds_to_hours_minutes(90), (0, 2));
        assert_eq!(seconds_to_hours_minutes(3600 + 29 * 60 + 29), (1, 29));
    }

    #[test]
    fn hm_to_seconds_accepts_decimals() {
        assert_eq!(hours_minutes_to_seconds("160", "0").unwrap(), 576_000);
        assert_eq!(hours_minutes_to_seconds("1.5", "30").unwrap(), 7200);
        assert!(matches!(
            hours_minutes_to_seconds("x", "0"),
            Err(AppError::InvalidOption { option, .. }) if option == "hours"
        ));
    }

    #[test]
    fn hm_to_seconds_rejects_values_a_duration_cannot_hold() {
        for huge in ["1e16", "inf", "-inf", "NaN"] {
            assert!(matches!(
                hours_minutes_to_seconds(huge, "0"),
                Err(AppError::InvalidOption { option, .. }) if option == "hours"
            ));
        }
        assert!(matches!(
            hours_minutes_to_seconds("160", "1e300"),
            Err(AppError::InvalidOption { option, .. }) if option == "minutes"
        ));
    }

    #[test]
    fn bad_strftime_is_an_error_not_a_panic() {
        let dt = Utc.timestamp_opt(0, 0).single().unwrap();
        assert_eq!(format_datetime(&dt, "%Y-%m-%d").unwrap(), "1970-01-01");
        assert!(matches!(
            format_datetime(&dt, "%Q"),
            Err(AppError::InvalidFormat(_))
        ));
    }
}
