use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::intake::IntakeRecord;
use super::recommendation::{Recommendation, RecommendationSource};

/// A submitted intake together with the recommendation it produced.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub created_at: jiff::Timestamp,
    pub input: IntakeRecord,
    pub output: Recommendation,
    pub source: RecommendationSource,
}

impl AssessmentRecord {
    pub fn new(
        input: IntakeRecord,
        output: Recommendation,
        source: RecommendationSource,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: jiff::Timestamp::now(),
            input,
            output,
            source,
        }
    }
}
