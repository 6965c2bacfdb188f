//! Caller-side intake validation.
//!
//! Runs on the raw request body before it is typed, so that every absent
//! field can be reported at once instead of failing on the first one.

use serde_json::{Value, json};
use thiserror::Error;

/// Fields that must be present and non-blank, in reporting order.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "age",
    "eye_contact",
    "speech_level",
    "social_response",
    "sensory_reactions",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeRejection {
    #[error("request body is required and must be a valid JSON object")]
    NotAnObject,

    #[error("the following fields are required: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Check that every required field is present and non-blank.
pub fn validate_intake(body: &Value) -> Result<(), IntakeRejection> {
    let object = body.as_object().ok_or(IntakeRejection::NotAnObject)?;

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| object.get(*field).is_none_or(is_blank))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(IntakeRejection::MissingFields(missing))
    }
}

/// A well-formed request body, returned alongside rejections.
pub fn example_intake() -> Value {
    json!({
        "age": "2",
        "eye_contact": "Moderate",
        "speech_level": "Passive",
        "social_response": "Active",
        "sensory_reactions": "Sensitive",
    })
}

/// Falsy or whitespace-only values count as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f == 0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => false,
    }
}
