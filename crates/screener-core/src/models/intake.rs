use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::emotion::EmotionEstimate;
use crate::error::CoreError;

/// The intake questionnaire as submitted by the form.
///
/// The four behavioural ratings are kept as free text: the form offers
/// `Good`/`Moderate`/`Poor` and friends, but the recommendation engine has to
/// be total over whatever arrives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeRecord {
    // Identifying (carried through to the report, not used by the rules)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,

    #[serde(default)]
    pub age: AgeValue,

    // Behavioural ratings
    #[serde(default)]
    pub eye_contact: String,
    #[serde(default)]
    pub speech_level: String,
    #[serde(default)]
    pub social_response: String,
    #[serde(default)]
    pub sensory_reactions: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_data: Option<EmotionEstimate>,
}

impl IntakeRecord {
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Age as it arrives from the form: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AgeValue {
    Number(f64),
    Text(String),
}

impl Default for AgeValue {
    fn default() -> Self {
        AgeValue::Text(String::new())
    }
}

impl AgeValue {
    /// Whole years, read the way a lenient web form reads a number: optional
    /// leading whitespace and sign, then leading digits. Anything after the
    /// digits (a fractional part, "years", ...) is ignored.
    ///
    /// Returns `None` when no digits lead the text.
    pub fn years(&self) -> Option<i64> {
        parse_leading_int(&self.to_string())
    }
}

impl fmt::Display for AgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeValue::Number(n) => write!(f, "{n}"),
            AgeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for AgeValue {
    fn from(years: u32) -> Self {
        AgeValue::Number(f64::from(years))
    }
}

impl From<&str> for AgeValue {
    fn from(text: &str) -> Self {
        AgeValue::Text(text.to_string())
    }
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
