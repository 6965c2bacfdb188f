use serde_json::Value;

use screener_core::models::intake::{AgeValue, IntakeRecord};

/// Age assumed when the submitted age cannot be read (or reads as zero).
pub const DEFAULT_AGE: i64 = 3;

/// The intake reduced to what the rules look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedIntake {
    /// Lowercased JSON array of every field value, used for keyword rules.
    pub blob: String,
    pub age: i64,
    pub eye_contact: String,
    pub speech_level: String,
    pub social_response: String,
    pub sensory_reactions: String,
}

impl NormalizedIntake {
    pub fn from_record(record: &IntakeRecord) -> Self {
        Self {
            blob: value_blob(record),
            age: record
                .age
                .years()
                .filter(|years| *years != 0)
                .unwrap_or(DEFAULT_AGE),
            eye_contact: record.eye_contact.to_lowercase(),
            speech_level: record.speech_level.to_lowercase(),
            social_response: record.social_response.to_lowercase(),
            sensory_reactions: record.sensory_reactions.to_lowercase(),
        }
    }

    pub fn blob_contains(&self, needle: &str) -> bool {
        self.blob.contains(needle)
    }
}

/// Field values only, in declaration order. Keys are left out, so keyword
/// rules never fire on field names like `social_response`.
fn value_blob(record: &IntakeRecord) -> String {
    let mut values: Vec<Value> = [&record.child_name, &record.father_name, &record.mother_name]
        .into_iter()
        .flatten()
        .map(|name| Value::String(name.clone()))
        .collect();

    values.push(match &record.age {
        AgeValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        AgeValue::Text(s) => Value::String(s.clone()),
    });

    for rating in [
        &record.eye_contact,
        &record.speech_level,
        &record.social_response,
        &record.sensory_reactions,
    ] {
        values.push(Value::String(rating.clone()));
    }

    if let Some(emotion) = &record.emotion_data {
        values.push(Value::String(emotion.dominant_emotion.as_str().to_string()));
        values.extend(
            std::iter::once(emotion.confidence)
                .chain(emotion.all_emotions.values().copied())
                .filter_map(serde_json::Number::from_f64)
                .map(Value::Number),
        );
    }

    Value::Array(values).to_string().to_lowercase()
}
