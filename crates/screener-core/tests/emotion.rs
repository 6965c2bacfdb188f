use std::collections::BTreeMap;

use screener_core::models::emotion::{Emotion, EmotionEstimate, EmotionLevel};

fn estimate(dominant: Emotion, shares: [f64; 7]) -> EmotionEstimate {
    let all_emotions: BTreeMap<Emotion, f64> = Emotion::ALL.into_iter().zip(shares).collect();
    EmotionEstimate {
        dominant_emotion: dominant,
        confidence: all_emotions[&dominant],
        all_emotions,
        analysis_timestamp: None,
    }
}

#[test]
fn consistent_estimate_passes() {
    let e = estimate(Emotion::Happy, [55.0, 10.0, 5.0, 10.0, 10.0, 5.0, 5.0]);
    assert!(e.check_invariants().is_ok());
}

#[test]
fn confidence_must_match_dominant_share() {
    let mut e = estimate(Emotion::Happy, [55.0, 10.0, 5.0, 10.0, 10.0, 5.0, 5.0]);
    e.confidence = 50.0;
    assert!(e.check_invariants().is_err());
}

#[test]
fn dominant_must_be_strict_maximum() {
    let e = estimate(Emotion::Fear, [40.0, 5.0, 5.0, 40.0, 5.0, 3.0, 2.0]);
    assert!(e.check_invariants().is_err());
}

#[test]
fn shares_must_sum_to_one_hundred() {
    let e = estimate(Emotion::Sad, [5.0, 70.0, 5.0, 5.0, 5.0, 5.0, 20.0]);
    assert!(e.check_invariants().is_err());
}

#[test]
fn breakdown_is_sorted_descending() {
    let e = estimate(Emotion::Angry, [10.0, 15.0, 45.0, 5.0, 20.0, 3.0, 2.0]);
    let order: Vec<Emotion> = e.breakdown().into_iter().map(|(emotion, _)| emotion).collect();
    assert_eq!(order[0], Emotion::Angry);
    assert_eq!(order[1], Emotion::Surprise);
    assert_eq!(order[6], Emotion::Neutral);
}

#[test]
fn levels_follow_thresholds() {
    assert_eq!(EmotionLevel::from_percentage(51.0), EmotionLevel::High);
    assert_eq!(EmotionLevel::from_percentage(50.0), EmotionLevel::Moderate);
    assert_eq!(EmotionLevel::from_percentage(30.5), EmotionLevel::Moderate);
    assert_eq!(EmotionLevel::from_percentage(16.0), EmotionLevel::Low);
    assert_eq!(EmotionLevel::from_percentage(15.0), EmotionLevel::Minimal);
}
