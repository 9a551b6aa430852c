//! printf-style rendering of `(hours, minutes)` pairs.
//!
//! The `timeshort_fmt` / `timelong_fmt` options hold patterns such as
//! `%02d:%02d` or `%dh %02dmin`. Each `%d` consumes the next value; `%%` is a
//! literal percent sign.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn directive() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%(0?)(\d*)([a-zA-Z%])").expect("static pattern"))
}

/// Render `(hours, minutes)` with a printf-style pattern.
pub fn format_hm(fmt: &str, (hours, minutes): (i64, i64)) -> AppResult<String> {
    let args = [hours, minutes];
    let mut next = 0;
    let mut out = String::with_capacity(fmt.len() + 4);
    let mut last = 0;

    for caps in directive().captures_iter(fmt) {
        let whole = caps.get(0).ok_or_else(|| AppError::InvalidFormat(fmt.into()))?;
        out.push_str(&fmt[last..whole.start()]);
        last = whole.end();

        match &caps[3] {
            "%" => out.push('%'),
            "d" => {
                let value = *args
                    .get(next)
                    .ok_or_else(|| AppError::InvalidFormat(fmt.to_string()))?;
                next += 1;

                let width: usize = if caps[2].is_empty() {
                    0
                } else {
                    caps[2]
                        .parse()
                        .map_err(|_| AppError::InvalidFormat(fmt.to_string()))?
                };

                if &caps[1] == "0" {
                    out.push_str(&format!("{:0width$}", value, width = width));
                } else {
                    out.push_str(&format!("{:width$}", value, width = width));
                }
            }
            _ => return Err(AppError::InvalidFormat(fmt.to_string())),
        }
    }

    out.push_str(&fmt[last..]);
    Ok(out)
}
