/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colour for a "left" figure: red once the target is exceeded (overtime),
/// green while time remains, plain at exactly zero.
pub fn color_for_left(left_secs: i64) -> &'static str {
    if left_secs > 0 {
        GREEN
    } else if left_secs < 0 {
        RED
    } else {
        RESET
    }
}

/// Grey out placeholder values such as "--".
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
