use serde::{Deserialize, Serialize};
use tracing::info;

use screener_core::models::intake::IntakeRecord;
use screener_core::models::recommendation::Recommendation;

use crate::context::GenerationContext;
use crate::fallback;
use crate::normalize::NormalizedIntake;
use crate::rng::EngineSeed;
use crate::rules::{ACTIVITY_RULES, GOAL_RULESETS};

/// Switches for optional generation behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// After the rulesets and the developmental minimum, keep offering
    /// generic goals until all six goal slots are used.
    #[serde(default)]
    pub top_up_goals: bool,
}

/// The rule engine. Stateless between calls; cheap to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Generate with a seed derived from the record and the current second.
    pub fn generate_now(&self, record: &IntakeRecord) -> Recommendation {
        self.generate(record, EngineSeed::now(record))
    }

    /// Run every ruleset in priority order, then the fallbacks.
    ///
    /// Total over its input: unrecognized ratings match no ruleset and the
    /// result is built from the fallback content alone.
    pub fn generate(&self, record: &IntakeRecord, seed: EngineSeed) -> Recommendation {
        let input = NormalizedIntake::from_record(record);
        let mut ctx = GenerationContext::new(seed);

        info!(seed = seed.value(), age = input.age, "generating recommendation");

        for ruleset in GOAL_RULESETS.iter().filter(|r| (r.applies)(&input)) {
            ruleset.apply(&input, &mut ctx);
        }

        fallback::ensure_minimum_goals(&mut ctx);
        if self.options.top_up_goals {
            fallback::top_up_goals(&mut ctx);
        }

        for rule in ACTIVITY_RULES.iter().filter(|r| (r.applies)(&input)) {
            rule.apply(&mut ctx);
        }
        fallback::fill_activities(&mut ctx);

        let recommendation = Recommendation {
            focus_areas: fallback::complete_focus_areas(ctx.focus_areas),
            therapy_goals: ctx.goals.into_vec(),
            activities: ctx.activities.into_vec(),
            notes: fallback::NOTES.to_string(),
        };

        info!(
            focus_areas = recommendation.focus_areas.len(),
            therapy_goals = recommendation.therapy_goals.len(),
            activities = recommendation.activities.len(),
            "recommendation generated"
        );

        recommendation
    }
}
