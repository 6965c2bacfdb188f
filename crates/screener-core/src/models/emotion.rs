use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Tolerance used when comparing percentages.
const PERCENT_EPSILON: f64 = 1e-6;

/// Percentages must sum to 100 within this slack (rounding in the form).
const TOTAL_SLACK: f64 = 0.5;

/// The seven basic emotions reported by the photo estimate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Fear,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }

    /// Capitalized name for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Angry => "Angry",
            Emotion::Fear => "Fear",
            Emotion::Surprise => "Surprise",
            Emotion::Disgust => "Disgust",
            Emotion::Neutral => "Neutral",
        }
    }
}

/// Heuristic emotion estimate attached to an intake.
///
/// Not real inference: the photo flow produces a randomized placeholder.
/// `confidence` always equals `all_emotions[dominant_emotion]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmotionEstimate {
    pub dominant_emotion: Emotion,
    pub confidence: f64,
    pub all_emotions: BTreeMap<Emotion, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_timestamp: Option<jiff::Timestamp>,
}

impl EmotionEstimate {
    /// Check the estimate's internal consistency.
    pub fn check_invariants(&self) -> Result<(), CoreError> {
        if !(self.confidence > 0.0 && self.confidence <= 100.0) {
            return Err(CoreError::EmotionInvariant(format!(
                "confidence {} is outside (0, 100]",
                self.confidence
            )));
        }

        let dominant_share = self
            .all_emotions
            .get(&self.dominant_emotion)
            .copied()
            .ok_or_else(|| {
                CoreError::EmotionInvariant(format!(
                    "dominant emotion '{}' missing from breakdown",
                    self.dominant_emotion.as_str()
                ))
            })?;

        if (dominant_share - self.confidence).abs() > PERCENT_EPSILON {
            return Err(CoreError::EmotionInvariant(format!(
                "confidence {} does not match {} share {dominant_share}",
                self.confidence,
                self.dominant_emotion.as_str()
            )));
        }

        if let Some((other, share)) = self
            .all_emotions
            .iter()
            .find(|(e, share)| **e != self.dominant_emotion && **share >= dominant_share)
        {
            return Err(CoreError::EmotionInvariant(format!(
                "{} share {share} ties or exceeds dominant {}",
                other.as_str(),
                self.dominant_emotion.as_str()
            )));
        }

        let total: f64 = self.all_emotions.values().sum();
        if (total - 100.0).abs() > TOTAL_SLACK {
            return Err(CoreError::EmotionInvariant(format!(
                "percentages sum to {total}, expected 100"
            )));
        }

        Ok(())
    }

    /// Emotions ordered by share, highest first.
    pub fn breakdown(&self) -> Vec<(Emotion, f64)> {
        let mut entries: Vec<_> = self.all_emotions.iter().map(|(e, v)| (*e, *v)).collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }
}

/// Coarse band for an emotion percentage, used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EmotionLevel {
    High,
    Moderate,
    Low,
    Minimal,
}

impl EmotionLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 50.0 {
            EmotionLevel::High
        } else if percentage > 30.0 {
            EmotionLevel::Moderate
        } else if percentage > 15.0 {
            EmotionLevel::Low
        } else {
            EmotionLevel::Minimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmotionLevel::High => "High",
            EmotionLevel::Moderate => "Moderate",
            EmotionLevel::Low => "Low",
            EmotionLevel::Minimal => "Minimal",
        }
    }
}
