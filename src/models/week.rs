use serde::Serialize;

/// The working rhythm a week is evaluated against.
/// Invariant: total_week_hours = working_days × hours_per_day.
#[derive(Debug, Clone, Serialize)]
pub struct WeekConfig {
    pub working_days: f64,
    pub hours_per_day: f64,
    pub total_week_hours: f64,
}

impl WeekConfig {
    /// Build a week from its total hours, spreading them evenly over
    /// the configured number of working days.
    pub fn from_total(total_week_hours: f64, working_days: f64) -> Self {
        Self {
            working_days,
            hours_per_day: total_week_hours / working_days,
            total_week_hours,
        }
    }
}
