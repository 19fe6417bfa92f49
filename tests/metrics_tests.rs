use chrono::NaiveDate;

use deepweek::core::metrics::{
    average_block_length, average_meeting_length, context_switch_tax, deep_work_time, meeting_time,
    non_deep_work_time, normalize_working_hours,
};
use deepweek::utils::date::{week_start, week_start_label};

const ROUNDING: u32 = 2;

fn approx_eq(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {} ≈ {}", a, b);
}

#[test]
fn average_meeting_length_zero_meetings_is_zero() {
    assert_eq!(average_meeting_length(10.0, 0, ROUNDING), 0.0);
    assert_eq!(average_meeting_length(0.0, 0, ROUNDING), 0.0);
}

#[test]
fn average_block_length_zero_blocks_is_zero() {
    assert_eq!(average_block_length(10.0, 0, ROUNDING), 0.0);
}

#[test]
fn meeting_time_proportion_matches_hours_over_week() {
    let w = 40.0;
    let hours = meeting_time(10.0, w, false, ROUNDING);
    let prop = meeting_time(10.0, w, true, ROUNDING);
    approx_eq(prop, hours / w);
}

#[test]
fn deep_and_non_deep_are_complementary() {
    let w = 40.0;
    for blocks in [0u32, 1, 4, 10] {
        let non_deep = non_deep_work_time(10.0, blocks, 15.0, w, false, ROUNDING);
        let deep = deep_work_time(10.0, blocks, 15.0, w, false, ROUNDING);
        approx_eq(deep + non_deep, w);
    }
}

#[test]
fn context_switch_tax_is_never_negative() {
    for blocks in 0u32..20 {
        for cost in [0.0, 5.0, 15.0, 30.0] {
            assert!(context_switch_tax(blocks, cost, 40.0, false, ROUNDING) >= 0.0);
        }
    }
}

#[test]
fn more_blocks_never_decrease_tax_or_non_deep_time() {
    let mut prev_tax = -1.0;
    let mut prev_non_deep = -1.0;
    for blocks in 0u32..15 {
        let tax = context_switch_tax(blocks, 15.0, 40.0, false, ROUNDING);
        let non_deep = non_deep_work_time(10.0, blocks, 15.0, 40.0, false, ROUNDING);
        assert!(tax >= prev_tax);
        assert!(non_deep >= prev_non_deep);
        prev_tax = tax;
        prev_non_deep = non_deep;
    }
}

#[test]
fn standard_scenario_week() {
    // 40h week, 10h of meetings, 8 meetings in 4 blocks, 15 min cost
    assert_eq!(average_meeting_length(10.0, 8, ROUNDING), 75.0);
    assert_eq!(average_block_length(10.0, 4, ROUNDING), 150.0);
    assert_eq!(context_switch_tax(4, 15.0, 40.0, false, ROUNDING), 1.0);
    assert_eq!(non_deep_work_time(10.0, 4, 15.0, 40.0, false, ROUNDING), 11.0);
    assert_eq!(deep_work_time(10.0, 4, 15.0, 40.0, false, ROUNDING), 29.0);
}

#[test]
fn no_meetings_leaves_deep_time_at_week_minus_meeting_hours() {
    let w = 40.0;
    assert_eq!(average_meeting_length(6.0, 0, ROUNDING), 0.0);
    assert_eq!(average_block_length(6.0, 0, ROUNDING), 0.0);
    approx_eq(deep_work_time(6.0, 0, 22.0, w, false, ROUNDING), w - 6.0);
}

#[test]
fn deep_work_time_may_go_negative() {
    // 45h of meetings in a 40h week: alarming but valid
    let deep = deep_work_time(45.0, 10, 15.0, 40.0, false, ROUNDING);
    assert!(deep < 0.0);
}

#[test]
fn week_start_label_is_stable_across_the_week() {
    // 2025-06-02 is a Monday
    let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let label = week_start_label(monday);
    assert_eq!(label, "02 June 2025");

    for offset in 0..7 {
        let d = monday + chrono::Duration::days(offset);
        assert_eq!(week_start(d), monday);
        assert_eq!(week_start_label(d), label);
    }
}

#[test]
fn week_start_crosses_month_boundaries() {
    // 2025-08-01 is a Friday; its week started Monday 28 July
    let d = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    assert_eq!(week_start_label(d), "28 July 2025");
}

#[test]
fn normalize_working_hours_replaces_zero_only() {
    assert_eq!(normalize_working_hours(0.0, 40.0), 40.0);
    assert_eq!(normalize_working_hours(37.5, 40.0), 37.5);
    assert_eq!(normalize_working_hours(80.0, 40.0), 80.0);
}
