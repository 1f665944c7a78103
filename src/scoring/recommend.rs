// Recommendation policy — an ordered decision list over the risk score
// and escalation probability. All comparisons are strict `>`, so boundary
// values fall to the next lower tier.

use serde::{Deserialize, Serialize};

/// One of four discrete response actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendedAction {
    ImmediateEscalation,
    SchedulePoliceReview,
    MonitorClosely,
    SafeZone,
}

impl RecommendedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::ImmediateEscalation => "IMMEDIATE_ESCALATION",
            RecommendedAction::SchedulePoliceReview => "SCHEDULE_POLICE_REVIEW",
            RecommendedAction::MonitorClosely => "MONITOR_CLOSELY",
            RecommendedAction::SafeZone => "SAFE_ZONE",
        }
    }
}

impl std::fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a risk score and escalation probability to an action.
///
/// Pure and total over its inputs; first match wins.
pub fn recommend(risk_score: f64, escalation_probability: f64) -> RecommendedAction {
    if risk_score > 80.0 || escalation_probability > 0.8 {
        RecommendedAction::ImmediateEscalation
    } else if risk_score > 60.0 {
        RecommendedAction::SchedulePoliceReview
    } else if risk_score > 40.0 {
        RecommendedAction::MonitorClosely
    } else {
        RecommendedAction::SafeZone
    }
}
