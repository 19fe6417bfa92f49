#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};

pub fn dw() -> Command {
    cargo_bin_cmd!("deepweek")
}

/// Run `analyze` with the standard meeting load used across tests:
/// 10h of meetings, 8 meetings in 4 blocks, 15 min switch cost.
pub fn analyze_with_hours(hours: &str, extra: &[&str]) -> Command {
    let mut cmd = dw();
    cmd.args([
        "analyze",
        "--hours",
        hours,
        "--meeting-hours",
        "10",
        "--meetings",
        "8",
        "--blocks",
        "4",
        "--switch-cost",
        "15",
    ]);
    cmd.args(extra);
    cmd
}

/// The standard load over a 40 hour week.
pub fn analyze_standard(extra: &[&str]) -> Command {
    analyze_with_hours("40", extra)
}
