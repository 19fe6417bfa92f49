use chrono::NaiveDate;

use crate::core::{metrics, recommend};
use crate::models::load::MeetingLoad;
use crate::models::report::{DerivedMetrics, WeekReport};
use crate::models::week::WeekConfig;
use crate::utils::date;

pub struct Core;

impl Core {
    /// One full evaluation pass: inputs → metrics → recommendation.
    /// Stateless; a new pass simply supersedes the previous one.
    pub fn build_report(
        day: NaiveDate,
        week: WeekConfig,
        load: MeetingLoad,
        required_deep_pct: u32,
        rounding: u32,
    ) -> WeekReport {
        let w = week.total_week_hours;

        let metrics = DerivedMetrics {
            meeting_time_hours: metrics::meeting_time(load.total_meeting_hours, w, false, rounding),
            meeting_time_pct: metrics::meeting_time(load.total_meeting_hours, w, true, rounding),
            avg_meeting_len_min: metrics::average_meeting_length(
                load.total_meeting_hours,
                load.total_meetings,
                rounding,
            ),
            avg_block_len_min: metrics::average_block_length(
                load.total_meeting_hours,
                load.total_meeting_blocks,
                rounding,
            ),
            context_tax_hours: metrics::context_switch_tax(
                load.total_meeting_blocks,
                load.context_switch_cost_mins,
                w,
                false,
                rounding,
            ),
            context_tax_pct: metrics::context_switch_tax(
                load.total_meeting_blocks,
                load.context_switch_cost_mins,
                w,
                true,
                rounding,
            ),
            non_deep_hours: metrics::non_deep_work_time(
                load.total_meeting_hours,
                load.total_meeting_blocks,
                load.context_switch_cost_mins,
                w,
                false,
                rounding,
            ),
            non_deep_pct: metrics::non_deep_work_time(
                load.total_meeting_hours,
                load.total_meeting_blocks,
                load.context_switch_cost_mins,
                w,
                true,
                rounding,
            ),
            deep_work_hours: metrics::deep_work_time(
                load.total_meeting_hours,
                load.total_meeting_blocks,
                load.context_switch_cost_mins,
                w,
                false,
                rounding,
            ),
            deep_work_pct: metrics::deep_work_time(
                load.total_meeting_hours,
                load.total_meeting_blocks,
                load.context_switch_cost_mins,
                w,
                true,
                rounding,
            ),
        };

        let recommendation = recommend::build_recommendation(
            metrics.deep_work_hours,
            required_deep_pct,
            w,
            metrics.avg_meeting_len_min,
        );

        WeekReport {
            week_commencing: date::week_start_label(day),
            week,
            load,
            metrics,
            recommendation,
        }
    }
}
