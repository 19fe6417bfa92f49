use serde::Serialize;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::week::WeekConfig;

/// The raw meeting load for one week, as reported by the operator.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingLoad {
    /// Time spent inside meetings (hours).
    pub total_meeting_hours: f64,
    /// Number of individual meetings.
    pub total_meetings: u32,
    /// Number of meeting blocks (runs of back-to-back meetings
    /// separated by no more than ~5 minutes). A block groups one or
    /// more meetings, so blocks ≤ meetings.
    pub total_meeting_blocks: u32,
    /// Minutes needed to regain focus after each meeting block.
    pub context_switch_cost_mins: f64,
}

impl MeetingLoad {
    /// Boundary validation. The calculator itself is guard-free: a
    /// conforming adapter must reject out-of-domain input here.
    pub fn validate(&self, week: &WeekConfig, cfg: &Config) -> AppResult<()> {
        if self.total_meeting_hours < 0.0 || self.total_meeting_hours > week.total_week_hours {
            return Err(AppError::out_of_range(
                "meeting-hours",
                format!(
                    "{} is outside 0..={}",
                    self.total_meeting_hours, week.total_week_hours
                ),
            ));
        }

        if self.total_meetings > cfg.max_meetings {
            return Err(AppError::out_of_range(
                "meetings",
                format!("{} exceeds the cap of {}", self.total_meetings, cfg.max_meetings),
            ));
        }

        if self.total_meeting_blocks > self.total_meetings {
            return Err(AppError::out_of_range(
                "blocks",
                format!(
                    "{} blocks cannot exceed {} meetings",
                    self.total_meeting_blocks, self.total_meetings
                ),
            ));
        }

        if self.context_switch_cost_mins < 0.0
            || self.context_switch_cost_mins > cfg.max_switch_cost_mins
        {
            return Err(AppError::out_of_range(
                "switch-cost",
                format!(
                    "{} is outside 0..={} minutes",
                    self.context_switch_cost_mins, cfg.max_switch_cost_mins
                ),
            ));
        }

        Ok(())
    }
}
