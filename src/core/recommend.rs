//! Recommendation derivation: deficit/surplus verdict and the range of
//! meetings to cut.

use serde::Serialize;

use crate::core::metrics::round_to;

/// Whether the week meets its deep-work target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outlook {
    Deficit,
    Surplus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Operator-supplied deep-work target (0–100 %).
    pub required_deep_pct: u32,
    /// Hours of deep work the target demands.
    pub required_hours: f64,
    /// Signed balance, rounded to 1 decimal; negative = deficit.
    pub balance_hours: f64,
    pub outlook: Outlook,
    /// Inclusive range of meetings to cut, low ≤ high.
    /// Forced to 0..0 when the average meeting length is non-positive.
    pub meetings_to_cut_low: u32,
    pub meetings_to_cut_high: u32,
}

/// Derive the recommendation from the week's deep-work outcome.
pub fn build_recommendation(
    deep_work_hours: f64,
    required_deep_pct: u32,
    total_week_hours: f64,
    avg_meeting_len_min: f64,
) -> Recommendation {
    let required_hours = required_deep_pct as f64 / 100.0 * total_week_hours;
    let balance_hours = round_to(deep_work_hours - required_hours, 1);

    let outlook = if balance_hours < 0.0 {
        Outlook::Deficit
    } else {
        Outlook::Surplus
    };

    // Cannot recommend cutting meetings with an undefined average length.
    let (low, high) = if avg_meeting_len_min <= 0.0 {
        (0, 0)
    } else {
        let cut = balance_hours.abs() * 60.0 / avg_meeting_len_min;
        let lo = cut.floor() as u32;
        let hi = cut.ceil() as u32;
        (lo.min(hi), lo.max(hi))
    };

    Recommendation {
        required_deep_pct,
        required_hours,
        balance_hours,
        outlook,
        meetings_to_cut_low: low,
        meetings_to_cut_high: high,
    }
}
