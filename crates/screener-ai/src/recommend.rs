//! Recommendation with an optional external model in front of the rule
//! engine.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{info, warn};

use screener_core::models::intake::IntakeRecord;
use screener_core::models::recommendation::{
    FOCUS_AREA_CAP, Recommendation, RecommendationSource,
};
use screener_engine::dedup::{ActivityList, GoalList};
use screener_engine::fallback::NOTES;
use screener_engine::{Engine, EngineSeed};

use crate::client::TextGenerator;
use crate::error::AiError;
use crate::prompt::build_prompt;

/// A recommendation and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub recommendation: Recommendation,
    pub source: RecommendationSource,
}

/// The keys a model reply must carry.
#[derive(Debug, Deserialize)]
struct ModelReply {
    focus_areas: Vec<String>,
    therapy_goals: Vec<String>,
    activities: Vec<String>,
    #[serde(default)]
    notes: Option<String>,
}

pub struct Recommender {
    engine: Engine,
    generator: Option<Box<dyn TextGenerator>>,
}

impl Recommender {
    /// Rule engine only.
    pub fn rules_only(engine: Engine) -> Self {
        Self {
            engine,
            generator: None,
        }
    }

    pub fn with_generator(engine: Engine, generator: Box<dyn TextGenerator>) -> Self {
        Self {
            engine,
            generator: Some(generator),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Recommend with a seed taken from the record and the current second.
    pub fn recommend(&self, record: &IntakeRecord) -> Generation {
        self.recommend_with_seed(record, EngineSeed::now(record))
    }

    /// Ask the model if one is configured; any failure falls through to the
    /// rule engine with `seed`.
    pub fn recommend_with_seed(&self, record: &IntakeRecord, seed: EngineSeed) -> Generation {
        if let Some(generator) = &self.generator {
            match ask_model(generator.as_ref(), record) {
                Ok(recommendation) => {
                    info!(backend = generator.name(), "using model recommendation");
                    return Generation {
                        recommendation,
                        source: RecommendationSource::ExternalModel,
                    };
                }
                Err(e) => {
                    warn!(
                        backend = generator.name(),
                        error = %e,
                        "model recommendation failed, falling back to rules"
                    );
                }
            }
        }

        Generation {
            recommendation: self.engine.generate(record, seed),
            source: RecommendationSource::RuleEngine,
        }
    }
}

fn ask_model(generator: &dyn TextGenerator, record: &IntakeRecord) -> Result<Recommendation, AiError> {
    let text = generator.generate(&build_prompt(record))?;
    parse_reply(&text)
}

/// Parse and check a model reply. Each list is de-duplicated the way the
/// rule engine does it and trimmed to its cap.
pub fn parse_reply(text: &str) -> Result<Recommendation, AiError> {
    let json: serde_json::Value = serde_json::from_str(strip_code_fences(text))
        .map_err(|e| AiError::ResponseParse(e.to_string()))?;

    let reply: ModelReply = serde_json::from_value(json)
        .map_err(|e| AiError::SchemaViolation(e.to_string()))?;

    let focus_areas = distinct_focus_areas(reply.focus_areas);
    if focus_areas.is_empty() {
        return Err(AiError::SchemaViolation("focus_areas is empty".to_string()));
    }

    let mut goals = GoalList::new();
    for goal in reply.therapy_goals.iter().filter(|g| !g.trim().is_empty()) {
        goals.offer(goal);
    }

    let mut activities = ActivityList::new();
    for activity in reply.activities.iter().filter(|a| !a.trim().is_empty()) {
        activities.offer(activity);
    }

    Ok(Recommendation {
        focus_areas,
        therapy_goals: goals.into_vec(),
        activities: activities.into_vec(),
        notes: reply
            .notes
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| NOTES.to_string()),
    })
}

/// Case-insensitive distinct pass in first-seen order, blanks dropped.
fn distinct_focus_areas(raw: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter(|area| !area.trim().is_empty())
        .filter(|area| seen.insert(area.trim().to_lowercase()))
        .take(FOCUS_AREA_CAP)
        .collect()
}

/// Drop a surrounding Markdown code fence (with or without a language tag).
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
