use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Upper bound on focus areas in a recommendation.
pub const FOCUS_AREA_CAP: usize = 6;

/// Upper bound on therapy goals in a recommendation.
pub const GOAL_CAP: usize = 6;

/// Upper bound on activities in a recommendation.
pub const ACTIVITY_CAP: usize = 8;

/// Generated guidance for one intake. Built once per submission and never
/// mutated after it is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub focus_areas: Vec<String>,
    pub therapy_goals: Vec<String>,
    pub activities: Vec<String>,
    pub notes: String,
}

/// Which path produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationSource {
    RuleEngine,
    ExternalModel,
}
