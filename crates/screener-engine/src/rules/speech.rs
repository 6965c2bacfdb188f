use super::{ActivityRule, AgeBand, GoalSource, Ruleset, contains_any};
use crate::normalize::NormalizedIntake;

pub const RULESET: Ruleset = Ruleset {
    name: "speech",
    applies: speech_concern,
    focus_areas: &[
        "Expressive & receptive communication",
        "Language development & vocabulary expansion",
        "Social communication & pragmatic skills",
    ],
    goals: GoalSource::AgeBanded(&[
        AgeBand {
            max_age: Some(3),
            goals: &EARLY_GOALS,
        },
        AgeBand {
            max_age: Some(6),
            goals: &SCHOOL_GOALS,
        },
        AgeBand {
            max_age: Some(12),
            goals: &MIDDLE_GOALS,
        },
        AgeBand {
            max_age: None,
            goals: &TEEN_GOALS,
        },
    ]),
};

pub const ACTIVITIES: ActivityRule = ActivityRule {
    name: "speech",
    applies: mentions_communication,
    activities: &[
        "Communication Development Program: During daily routines like meals, bath, and play, provide constant narration describing actions (\"We are washing hands,\" \"Time to eat breakfast\"). Label objects by holding them up and saying the name clearly 3 times. Sing interactive songs with hand motions and pause for child to fill in familiar words.",
        "Functional Communication Training: Create a picture communication board with essential needs (eat, drink, play, help). Practice simple choice-making by offering two options with visual and verbal cues. Use gesture-word combinations like waving + \"bye-bye\" and encourage child to imitate. Read simple picture books together, pointing to images and encouraging naming.",
    ],
};

pub const EARLY_GOALS: [&str; 5] = [
    "Encourage early vocalizations and sound imitation during play",
    "Use simple gestures and signs to support communication development",
    "Build receptive language through naming and describing daily activities",
    "Practice babbling and sound play during interactive games",
    "Develop pre-verbal communication through reaching and pointing",
];

pub const SCHOOL_GOALS: [&str; 5] = [
    "Increase functional communication using words, signs, or picture cards",
    "Develop age-appropriate vocabulary for daily needs and emotions",
    "Improve turn-taking skills in conversations and play",
    "Build sentence structure and grammatical understanding",
    "Practice requesting help and expressing needs clearly",
];

pub const MIDDLE_GOALS: [&str; 5] = [
    "Enhance expressive language skills for academic and social success",
    "Develop conversation skills including asking questions and sharing ideas",
    "Improve narrative skills through storytelling and describing experiences",
    "Build complex sentence structures and abstract language concepts",
    "Practice social communication skills for peer interactions",
];

pub const TEEN_GOALS: [&str; 5] = [
    "Strengthen communication skills for independence and social relationships",
    "Develop advanced language skills for academic and vocational success",
    "Practice effective communication in various social contexts",
    "Build professional communication skills for workplace readiness",
    "Enhance self-advocacy and assertiveness in communication",
];

pub fn speech_concern(input: &NormalizedIntake) -> bool {
    contains_any(&input.speech_level, &["no", "limited", "few", "passive"])
}

pub fn mentions_communication(input: &NormalizedIntake) -> bool {
    contains_any(&input.blob, &["speech", "communication"])
}
