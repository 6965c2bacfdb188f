use super::{ActivityRule, AgeBand, GoalSource, Ruleset, contains_any};
use crate::normalize::NormalizedIntake;

pub const RULESET: Ruleset = Ruleset {
    name: "eye_contact",
    applies: eye_contact_concern,
    focus_areas: &[
        "Eye contact & visual attention",
        "Joint attention & shared focus skills",
        "Non-verbal communication improvement",
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
            max_age: None,
            goals: &TEEN_GOALS,
        },
    ]),
};

pub const ACTIVITIES: ActivityRule = ActivityRule {
    name: "eye_contact",
    applies: mentions_eye_contact_difficulty,
    activities: &[
        "Eye Contact Development Activities: Start with 5-10 minutes of interactive peek-a-boo games using colorful scarves or blankets. Position yourself at child's eye level during mirror play, pointing to eyes and saying \"look at me\" while making funny faces. Practice face-to-face singing with simple nursery rhymes, pausing to wait for eye contact before continuing the song.",
        "Joint Attention Building Exercises: Use child's favorite toys or objects to practice pointing and showing. Hold toy near your face, say \"look\" and point to the object, then to your eyes. Practice \"show me\" games where child brings objects to share with you. Create photo albums of family members and point to faces while naming them together.",
    ],
};

pub const EARLY_GOALS: [&str; 5] = [
    "Begin with brief moments of shared attention during preferred play activities",
    "Use peek-a-boo and simple turn-taking games to encourage eye contact",
    "Practice joint attention through pointing at interesting objects together",
    "Build visual connection through mirror play and face games",
    "Encourage looking at faces during feeding and caregiving routines",
];

pub const SCHOOL_GOALS: [&str; 5] = [
    "Practice making and holding brief eye contact during preferred activities",
    "Develop joint attention skills through pointing and showing objects",
    "Improve social referencing by looking at caregivers during interactions",
    "Build eye contact comfort through structured games and activities",
    "Practice looking at speaker during group instruction time",
];

pub const TEEN_GOALS: [&str; 5] = [
    "Strengthen eye contact skills during conversations and social interactions",
    "Practice maintaining appropriate eye contact during learning activities",
    "Develop confidence in using eye contact for social communication",
    "Build professional eye contact skills for workplace preparation",
    "Practice cultural awareness of appropriate eye contact in different settings",
];

/// Eye-contact rating reads as limited, poor, or absent.
pub fn eye_contact_concern(input: &NormalizedIntake) -> bool {
    contains_any(&input.eye_contact, &["limited", "poor", "no"])
}

/// The literal phrase "eye contact" appears alongside a poor or moderate
/// rating. Ratings alone never carry the phrase, so this only fires on free
/// text that spells it out.
pub fn mentions_eye_contact_difficulty(input: &NormalizedIntake) -> bool {
    input.blob_contains("eye contact") && contains_any(&input.blob, &["poor", "moderate"])
}
