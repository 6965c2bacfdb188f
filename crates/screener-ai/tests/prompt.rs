use std::collections::BTreeMap;

use screener_ai::prompt::build_prompt;
use screener_core::models::emotion::{Emotion, EmotionEstimate};
use screener_core::models::intake::IntakeRecord;

fn record() -> IntakeRecord {
    IntakeRecord {
        age: "4".into(),
        eye_contact: "Poor".to_string(),
        speech_level: "Limited".to_string(),
        social_response: "Passive".to_string(),
        sensory_reactions: "Sensitive".to_string(),
        ..Default::default()
    }
}

#[test]
fn lists_the_five_ratings() {
    let prompt = build_prompt(&record());
    assert!(prompt.starts_with(
        "Child age: 4\nEye contact: Poor\nSpeech level: Limited\nSocial response: Passive\nSensory reactions: Sensitive\n"
    ));
    assert!(prompt.contains("Return JSON with keys: focus_areas (list of strings)"));
}

#[test]
fn plain_prompt_has_no_emotion_wording() {
    let prompt = build_prompt(&record());
    assert!(prompt.contains("Based on this child's responses, give 3 short therapy goals"));
    assert!(!prompt.contains("Emotion Analysis"));
    assert!(!prompt.contains("emotional state"));
}

#[test]
fn emotion_estimate_is_described() {
    let mut record = record();
    let mut all_emotions: BTreeMap<Emotion, f64> =
        Emotion::ALL.into_iter().map(|e| (e, 5.0)).collect();
    all_emotions.insert(Emotion::Fear, 70.0);
    record.emotion_data = Some(EmotionEstimate {
        dominant_emotion: Emotion::Fear,
        confidence: 70.0,
        all_emotions,
        analysis_timestamp: None,
    });

    let prompt = build_prompt(&record);
    assert!(prompt.contains(
        "Emotion Analysis: Primary emotion detected is fear with 70% confidence."
    ));
    assert!(prompt.contains("All emotions detected: happy: 5%, sad: 5%, angry: 5%, fear: 70%,"));
    assert!(prompt.contains("Based on this child's responses and emotional state,"));
    assert!(prompt.contains("Consider the detected emotions when providing recommendations."));
}

#[test]
fn numeric_age_is_printed_plainly() {
    let mut record = record();
    record.age = 7u32.into();
    assert!(build_prompt(&record).starts_with("Child age: 7\n"));
}
