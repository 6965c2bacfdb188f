//! Prompt text for the external model.

use screener_core::models::intake::IntakeRecord;

/// Describe the intake and ask for a JSON recommendation.
///
/// The emotion section and the emotion-specific instructions are only
/// present when the intake carries an estimate.
pub fn build_prompt(record: &IntakeRecord) -> String {
    let mut prompt = format!(
        "Child age: {}\nEye contact: {}\nSpeech level: {}\nSocial response: {}\nSensory reactions: {}\n",
        record.age,
        record.eye_contact,
        record.speech_level,
        record.social_response,
        record.sensory_reactions,
    );

    let with_emotion = record.emotion_data.is_some();

    if let Some(emotion) = &record.emotion_data {
        let all = emotion
            .all_emotions
            .iter()
            .map(|(e, share)| format!("{}: {share}%", e.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        prompt.push_str(&format!(
            "\nEmotion Analysis: Primary emotion detected is {} with {}% confidence. All emotions detected: {all}.\n",
            emotion.dominant_emotion.as_str(),
            emotion.confidence,
        ));
    }

    prompt.push_str(&format!(
        "\nBased on this child's responses{}, give 3 short therapy goals and 2 activities that can help improvement. {}Return JSON with keys: focus_areas (list of strings), therapy_goals (list of 3 strings), activities (list of 2 strings).",
        if with_emotion { " and emotional state" } else { "" },
        if with_emotion {
            "Consider the detected emotions when providing recommendations. "
        } else {
            ""
        },
    ));

    prompt
}
