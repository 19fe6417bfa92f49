use predicates::str::contains;

mod common;
use common::{analyze_standard, analyze_with_hours, dw};

#[test]
fn init_in_test_mode_succeeds() {
    dw().args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));
}

#[test]
fn analyze_standard_scenario_prints_metrics() {
    analyze_standard(&["--target", "80"])
        .assert()
        .success()
        .stdout(contains("Deep work time (hours)"))
        .stdout(contains("29.0"))
        .stdout(contains("75"))
        .stdout(contains("150"))
        .stdout(contains("deficit of"))
        .stdout(contains("2 to 3"));
}

#[test]
fn analyze_surplus_scenario_needs_no_cuts() {
    analyze_standard(&["--target", "50"])
        .assert()
        .success()
        .stdout(contains("surplus of"))
        .stdout(contains("You do not need to remove any meetings"));
}

#[test]
fn analyze_json_report_parses() {
    let output = analyze_standard(&["--target", "80", "--json"])
        .output()
        .expect("failed to run deepweek");
    assert!(output.status.success());

    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");

    assert_eq!(v["metrics"]["deep_work_hours"], 29.0);
    assert_eq!(v["metrics"]["avg_meeting_len_min"], 75.0);
    assert_eq!(v["metrics"]["context_tax_hours"], 1.0);
    assert_eq!(v["recommendation"]["balance_hours"], -3.0);
    assert_eq!(v["recommendation"]["outlook"], "deficit");
    assert_eq!(v["recommendation"]["meetings_to_cut_low"], 2);
    assert_eq!(v["recommendation"]["meetings_to_cut_high"], 3);
}

#[test]
fn zero_hours_falls_back_to_default_week() {
    dw().args(["analyze", "--meeting-hours", "5", "--meetings", "4", "--blocks", "2"])
        .assert()
        .success()
        .stdout(contains("40 hours a week"));
}

#[test]
fn long_week_triggers_warning_advisory() {
    analyze_with_hours("45", &[])
        .assert()
        .success()
        .stdout(contains("in excess of 40"));
}

#[test]
fn very_long_week_triggers_error_advisory() {
    analyze_with_hours("60", &[])
        .assert()
        .success()
        .stdout(contains("in excess of 50"));
}

#[test]
fn week_hours_out_of_bounds_is_rejected() {
    analyze_with_hours("90", &[])
        .assert()
        .failure()
        .stderr(contains("Invalid value for hours"));
}

#[test]
fn more_blocks_than_meetings_is_rejected() {
    dw().args([
        "analyze",
        "--hours",
        "40",
        "--meeting-hours",
        "5",
        "--meetings",
        "3",
        "--blocks",
        "4",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid value for blocks"));
}

#[test]
fn meeting_hours_beyond_week_is_rejected() {
    dw().args([
        "analyze",
        "--hours",
        "40",
        "--meeting-hours",
        "41",
        "--meetings",
        "10",
        "--blocks",
        "5",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid value for meeting-hours"));
}

#[test]
fn target_above_100_is_rejected_by_the_parser() {
    analyze_standard(&["--target", "120"]).assert().failure();
}

#[test]
fn malformed_date_is_rejected() {
    analyze_standard(&["31-12-2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn far_away_date_is_rejected() {
    analyze_standard(&["2019-01-01"])
        .assert()
        .failure()
        .stderr(contains("Date out of range"));
}

#[test]
fn week_commencing_label_appears_in_output() {
    // Any date near today is in range; use today's default and check
    // the caption is present
    analyze_standard(&[])
        .assert()
        .success()
        .stdout(contains("Your Results For w/c"));
}
