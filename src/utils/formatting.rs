//! Formatting utilities for CLI output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Hours with one decimal place, e.g. "29.0".
pub fn fmt_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// A ratio rendered as a whole percentage, e.g. 0.275 → "28%".
pub fn fmt_pct(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Minutes with no decimals, e.g. "75".
pub fn fmt_mins(mins: f64) -> String {
    format!("{:.0}", mins)
}
