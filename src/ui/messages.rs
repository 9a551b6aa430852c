//! User-facing terminal output.

use crate::utils::colors::{BOLD, CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

const FG_BLUE: &str = "\x1b[34m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_BELL: &str = "🔔";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Console stand-in for a desktop notification bubble.
pub fn notice<T: fmt::Display, B: fmt::Display>(title: T, body: B) {
    println!("{}{}{} {}:{} {}", YELLOW, BOLD, ICON_BELL, title, RESET, body);
}

/// Section header, e.g. "=== This week ==="
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}

/// Aligned "label: value" row.
pub fn row<L: fmt::Display, V: fmt::Display>(label: L, value: V) {
    println!("{}{:<14}{} {}", CYAN, format!("{label}:"), RESET, value);
}
