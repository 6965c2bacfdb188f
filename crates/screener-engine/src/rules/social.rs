use super::{ActivityRule, AgeBand, GoalSource, Ruleset, contains_any};
use crate::normalize::NormalizedIntake;

pub const RULESET: Ruleset = Ruleset {
    name: "social",
    applies: social_concern,
    focus_areas: &[
        "Social skills & peer interaction",
        "Social communication & pragmatics",
        "Emotional understanding & empathy",
    ],
    goals: GoalSource::AgeBanded(&[
        AgeBand {
            max_age: Some(4),
            goals: &EARLY_GOALS,
        },
        AgeBand {
            max_age: Some(8),
            goals: &SCHOOL_GOALS,
        },
        AgeBand {
            max_age: None,
            goals: &TEEN_GOALS,
        },
    ]),
};

/// Free-text mention of social engagement, independent of the rating.
pub const KEYWORD_RULESET: Ruleset = Ruleset {
    name: "social_keyword",
    applies: mentions_social_engagement,
    focus_areas: &[
        "Social interaction & peer engagement",
        "Play skills & social imagination",
    ],
    goals: GoalSource::Fixed(&[
        "Develop age-appropriate social play skills with peers and siblings",
        "Practice sharing, taking turns, and cooperative activities",
    ]),
};

pub const ACTIVITIES: ActivityRule = ActivityRule {
    name: "social",
    applies: mentions_social_engagement,
    activities: &[
        "Social Skills Development Sessions: Practice structured turn-taking using timers and visual cues with board games, building blocks, or art activities. Engage in parallel play by sitting beside child with similar toys, narrating actions and occasionally offering to share materials. Create simple cooperative tasks like sorting toys together or preparing snacks as a team.",
        "Social Understanding Activities: Read age-appropriate social stories about everyday situations like greetings, sharing, and asking for help. Practice emotion recognition using family photos, emotion cards, or mirror games to identify happy, sad, mad faces. Role-play common social scenarios like saying hello, asking to play, and saying please/thank you using dolls or stuffed animals.",
    ],
};

pub const EARLY_GOALS: [&str; 5] = [
    "Encourage parallel play and shared attention with peers",
    "Practice simple social greetings and farewells",
    "Develop awareness of others through imitation games",
    "Build comfort with peer interactions in structured settings",
    "Practice taking turns in simple games and activities",
];

pub const SCHOOL_GOALS: [&str; 5] = [
    "Develop age-appropriate social play skills with peers and siblings",
    "Practice sharing, taking turns, and cooperative activities",
    "Learn to recognize and respond to social cues from others",
    "Build friendship skills through structured social activities",
    "Practice problem-solving in peer conflicts with adult support",
];

pub const TEEN_GOALS: [&str; 5] = [
    "Build meaningful friendships through shared interests and activities",
    "Develop conflict resolution and problem-solving skills with peers",
    "Practice social communication skills for group settings",
    "Learn to navigate complex social situations with confidence",
    "Develop leadership and collaboration skills in team activities",
];

pub fn social_concern(input: &NormalizedIntake) -> bool {
    contains_any(&input.social_response, &["difficulty", "limited", "passive"])
}

pub fn mentions_social_engagement(input: &NormalizedIntake) -> bool {
    input.blob_contains("social") && contains_any(&input.blob, &["active", "passive"])
}
