use serde::Serialize;

use crate::core::recommend::Recommendation;
use crate::models::load::MeetingLoad;
use crate::models::week::WeekConfig;

/// Every derived metric of one evaluation pass.
/// Percentages are the hours value divided by total_week_hours; all
/// values are recomputed on every pass, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedMetrics {
    pub meeting_time_hours: f64,
    pub meeting_time_pct: f64,
    pub avg_meeting_len_min: f64,
    pub avg_block_len_min: f64,
    pub context_tax_hours: f64,
    pub context_tax_pct: f64,
    pub non_deep_hours: f64,
    pub non_deep_pct: f64,
    pub deep_work_hours: f64,
    pub deep_work_pct: f64,
}

/// One full evaluation: inputs, derived metrics and the recommendation.
/// Lifecycle is "computed, displayed, discarded" — nothing persists.
#[derive(Debug, Clone, Serialize)]
pub struct WeekReport {
    /// Monday of the analysed week, formatted as "%d %B %Y".
    pub week_commencing: String,
    pub week: WeekConfig,
    pub load: MeetingLoad,
    pub metrics: DerivedMetrics,
    pub recommendation: Recommendation,
}
