use crate::dedup::{ActivityList, GoalList};
use crate::rng::{EngineSeed, SeededRng};

/// Mutable state for one generation call, threaded through every ruleset.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub rng: SeededRng,
    pub goals: GoalList,
    pub activities: ActivityList,
    /// Raw focus labels; duplicates are collapsed when the result is built.
    pub focus_areas: Vec<String>,
}

impl GenerationContext {
    pub fn new(seed: EngineSeed) -> Self {
        Self {
            rng: SeededRng::new(seed),
            goals: GoalList::new(),
            activities: ActivityList::new(),
            focus_areas: Vec::new(),
        }
    }
}
