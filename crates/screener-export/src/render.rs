use serde::Serialize;
use tera::{Context, Tera};

use screener_core::models::emotion::{EmotionEstimate, EmotionLevel};
use screener_core::models::record::AssessmentRecord;
use screener_core::models::recommendation::RecommendationSource;

use crate::error::ExportError;

pub const REPORT_TEMPLATE_NAME: &str = "report.md";

/// Built-in report layout. Lines starting with `#`/`##` become headings,
/// `- ` lines become bullets, `1. ` lines numbered items, `---` a page break.
pub const REPORT_TEMPLATE: &str = r#"# Developmental Screening Report
Generated on: {{ generated_on }}
Record: {{ record_id }}

## Child Information
{% if child_name %}- **Child:** {{ child_name }}
{% endif %}{% if father_name %}- **Father:** {{ father_name }}
{% endif %}{% if mother_name %}- **Mother:** {{ mother_name }}
{% endif %}- **Age:** {{ age }}

## Screening Responses
- **Eye contact:** {{ eye_contact }}
- **Speech level:** {{ speech_level }}
- **Social response:** {{ social_response }}
- **Sensory reactions:** {{ sensory_reactions }}
{% if emotion %}
## Emotion Analysis
**Primary emotion:** {{ emotion.dominant }} ({{ emotion.confidence }}% confidence)
{% for row in emotion.rows %}- **{{ row.label }}:** {{ row.percentage }}% ({{ row.level }})
{% endfor %}**Emotions detected:** {{ emotion.rows | length }}
**Highest share:** {{ emotion.highest }}%
{% endif %}
## Focus Areas
{% for area in focus_areas %}- {{ area }}
{% endfor %}
## Therapy Goals
{% for goal in therapy_goals %}{{ loop.index }}. {{ goal }}
{% endfor %}
## Recommended Activities
{% for activity in activities %}- {{ activity }}
{% endfor %}
## Notes
{{ notes }}

Prepared by: {{ source }}
"#;

/// Flattened view of a record for templates.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub record_id: String,
    pub generated_on: String,
    pub child_name: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub age: String,
    pub eye_contact: String,
    pub speech_level: String,
    pub social_response: String,
    pub sensory_reactions: String,
    pub emotion: Option<EmotionSection>,
    pub focus_areas: Vec<String>,
    pub therapy_goals: Vec<String>,
    pub activities: Vec<String>,
    pub notes: String,
    pub source: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmotionSection {
    pub dominant: &'static str,
    pub confidence: String,
    pub highest: String,
    pub rows: Vec<EmotionRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmotionRow {
    pub label: &'static str,
    pub percentage: String,
    pub level: &'static str,
}

impl ReportContext {
    pub fn from_record(record: &AssessmentRecord) -> Self {
        let input = &record.input;
        let output = &record.output;

        Self {
            record_id: record.id.to_string(),
            generated_on: record.created_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
            child_name: input.child_name.clone(),
            father_name: input.father_name.clone(),
            mother_name: input.mother_name.clone(),
            age: input.age.to_string(),
            eye_contact: input.eye_contact.clone(),
            speech_level: input.speech_level.clone(),
            social_response: input.social_response.clone(),
            sensory_reactions: input.sensory_reactions.clone(),
            emotion: input.emotion_data.as_ref().map(EmotionSection::from_estimate),
            focus_areas: output.focus_areas.clone(),
            therapy_goals: output.therapy_goals.clone(),
            activities: output.activities.clone(),
            notes: output.notes.clone(),
            source: match record.source {
                RecommendationSource::RuleEngine => "rule-based screening engine",
                RecommendationSource::ExternalModel => "external language model",
            },
        }
    }
}

impl EmotionSection {
    fn from_estimate(estimate: &EmotionEstimate) -> Self {
        let breakdown = estimate.breakdown();
        let highest = breakdown.first().map_or(0.0, |(_, share)| *share);

        Self {
            dominant: estimate.dominant_emotion.label(),
            confidence: percent(estimate.confidence),
            highest: percent(highest),
            rows: breakdown
                .into_iter()
                .map(|(emotion, share)| EmotionRow {
                    label: emotion.label(),
                    percentage: percent(share),
                    level: EmotionLevel::from_percentage(share).label(),
                })
                .collect(),
        }
    }
}

fn percent(value: f64) -> String {
    format!("{value:.1}")
}

/// Render a Tera template against a record.
///
/// The `template_content` is the raw template string (Jinja2 syntax); the
/// fields of [`ReportContext`] are its variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    record: &AssessmentRecord,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(ReportContext::from_record(record))?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}

/// Render the built-in report.
pub fn render_report(record: &AssessmentRecord) -> Result<String, ExportError> {
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, record)
}
