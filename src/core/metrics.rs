//! The pure calculation core: scalar inputs in, derived metrics out.
//!
//! Every function here is deterministic and total on its documented
//! domain. None of them read ambient state — the adapter passes every
//! input explicitly, which is what makes the core testable without a
//! terminal.

/// Round to `digits` decimal places.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Average meeting length in minutes.
/// Returns 0 when there are no meetings (division-by-zero guard).
pub fn average_meeting_length(total_meeting_hours: f64, total_meetings: u32, rounding: u32) -> f64 {
    if total_meetings == 0 {
        return 0.0;
    }
    round_to(total_meeting_hours / total_meetings as f64 * 60.0, rounding)
}

/// Average meeting-block length in minutes.
/// Returns 0 when there are no blocks (division-by-zero guard).
pub fn average_block_length(
    total_meeting_hours: f64,
    total_meeting_blocks: u32,
    rounding: u32,
) -> f64 {
    if total_meeting_blocks == 0 {
        return 0.0;
    }
    round_to(
        total_meeting_hours / total_meeting_blocks as f64 * 60.0,
        rounding,
    )
}

/// Time spent in meetings, as hours or as a proportion of the week.
/// No zero-guard: the caller must ensure total_week_hours > 0.
pub fn meeting_time(
    total_meeting_hours: f64,
    total_week_hours: f64,
    as_proportion: bool,
    rounding: u32,
) -> f64 {
    let mut val = total_meeting_hours;
    if as_proportion {
        val /= total_week_hours;
    }
    round_to(val, rounding)
}

/// The context-switch tax: the re-focusing cost paid once per meeting
/// BLOCK, not per meeting — back-to-back meetings in a block share one
/// recovery period.
pub fn context_switch_tax(
    total_meeting_blocks: u32,
    context_switch_cost_mins: f64,
    total_week_hours: f64,
    as_proportion: bool,
    rounding: u32,
) -> f64 {
    let mut val = round_to(
        total_meeting_blocks as f64 * context_switch_cost_mins / 60.0,
        rounding,
    );
    if as_proportion {
        val /= total_week_hours;
    }
    round_to(val, rounding)
}

/// Time unavailable for deep work: hours in meetings plus the
/// context-switch tax.
pub fn non_deep_work_time(
    total_meeting_hours: f64,
    total_meeting_blocks: u32,
    context_switch_cost_mins: f64,
    total_week_hours: f64,
    as_proportion: bool,
    rounding: u32,
) -> f64 {
    let mut val = total_meeting_hours
        + context_switch_tax(
            total_meeting_blocks,
            context_switch_cost_mins,
            total_week_hours,
            false,
            rounding,
        );
    if as_proportion {
        val /= total_week_hours;
    }
    round_to(val, rounding)
}

/// Deep-work time left in the week. May be negative when the meeting
/// load exceeds the working hours; that is a valid (if alarming)
/// result, not an error.
pub fn deep_work_time(
    total_meeting_hours: f64,
    total_meeting_blocks: u32,
    context_switch_cost_mins: f64,
    total_week_hours: f64,
    as_proportion: bool,
    rounding: u32,
) -> f64 {
    let mut val = total_week_hours
        - non_deep_work_time(
            total_meeting_hours,
            total_meeting_blocks,
            context_switch_cost_mins,
            total_week_hours,
            false,
            rounding,
        );
    if as_proportion {
        val /= total_week_hours;
    }
    round_to(val, rounding)
}

/// Replace a zero-initialized hours input with the configured default.
/// Zero is a widget artifact here, not a legitimate "no working hours"
/// answer.
pub fn normalize_working_hours(raw_hours: f64, default_hours: f64) -> f64 {
    if raw_hours == 0.0 {
        default_hours
    } else {
        raw_hours
    }
}
