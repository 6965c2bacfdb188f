//! The ordered rulesets.
//!
//! Goal rulesets share one six-slot goal list, so their order is their
//! priority: an earlier ruleset claims slots before a later one sees them.
//! Each ruleset's condition is a named predicate over the normalized intake.

pub mod emotion;
pub mod eye_contact;
pub mod sensory;
pub mod social;
pub mod speech;

use tracing::debug;

use crate::context::GenerationContext;
use crate::normalize::NormalizedIntake;

/// A single ruleset offers at most this many goals from an age bank.
pub const GOALS_PER_RULESET: usize = 3;

/// Goal rulesets, highest priority first.
pub static GOAL_RULESETS: [Ruleset; 8] = [
    eye_contact::RULESET,
    speech::RULESET,
    sensory::RULESET,
    social::RULESET,
    social::KEYWORD_RULESET,
    emotion::DISTRESS_RULESET,
    emotion::FRUSTRATION_RULESET,
    emotion::JOY_RULESET,
];

/// Activity rules, in the order they claim activity slots.
pub static ACTIVITY_RULES: [ActivityRule; 6] = [
    eye_contact::ACTIVITIES,
    speech::ACTIVITIES,
    social::ACTIVITIES,
    sensory::ACTIVITIES,
    emotion::DISTRESS_ACTIVITIES,
    emotion::JOY_ACTIVITIES,
];

/// Condition plus content for focus areas and goals.
#[derive(Debug, Clone, Copy)]
pub struct Ruleset {
    pub name: &'static str,
    pub applies: fn(&NormalizedIntake) -> bool,
    pub focus_areas: &'static [&'static str],
    pub goals: GoalSource,
}

#[derive(Debug, Clone, Copy)]
pub enum GoalSource {
    /// Pick a bank by age, shuffle it, offer the first few.
    AgeBanded(&'static [AgeBand]),
    /// Offer every goal, in order.
    Fixed(&'static [&'static str]),
}

/// Goal bank used up to and including `max_age`; `None` is the open top band.
#[derive(Debug, Clone, Copy)]
pub struct AgeBand {
    pub max_age: Option<i64>,
    pub goals: &'static [&'static str],
}

/// Condition plus long-form activity descriptions.
#[derive(Debug, Clone, Copy)]
pub struct ActivityRule {
    pub name: &'static str,
    pub applies: fn(&NormalizedIntake) -> bool,
    pub activities: &'static [&'static str],
}

impl Ruleset {
    pub fn apply(&self, input: &NormalizedIntake, ctx: &mut GenerationContext) {
        ctx.focus_areas
            .extend(self.focus_areas.iter().map(|area| area.to_string()));

        match self.goals {
            GoalSource::AgeBanded(bands) => {
                let bank = band_for_age(bands, input.age);
                let shuffled = ctx.rng.shuffle(bank);
                let offered = GOALS_PER_RULESET.min(ctx.goals.remaining());
                for goal in shuffled.into_iter().take(offered) {
                    ctx.goals.offer(goal);
                }
            }
            GoalSource::Fixed(goals) => {
                for goal in goals {
                    ctx.goals.offer(goal);
                }
            }
        }

        debug!(
            ruleset = self.name,
            age = input.age,
            goals = ctx.goals.len(),
            "ruleset applied"
        );
    }
}

impl ActivityRule {
    pub fn apply(&self, ctx: &mut GenerationContext) {
        for activity in self.activities {
            ctx.activities.offer(activity);
        }
        debug!(
            rule = self.name,
            activities = ctx.activities.len(),
            "activity rule applied"
        );
    }
}

/// First band whose ceiling covers `age`. An empty slice yields no goals.
pub fn band_for_age(bands: &[AgeBand], age: i64) -> &'static [&'static str] {
    bands
        .iter()
        .find(|band| band.max_age.is_none_or(|max| age <= max))
        .map(|band| band.goals)
        .unwrap_or(&[])
}

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
