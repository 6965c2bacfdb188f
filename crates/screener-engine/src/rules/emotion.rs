//! Rulesets keyed on emotion words anywhere in the intake, typically the
//! dominant emotion of an attached photo estimate.

use super::{ActivityRule, GoalSource, Ruleset, contains_any};
use crate::normalize::NormalizedIntake;

pub const DISTRESS_RULESET: Ruleset = Ruleset {
    name: "emotion_distress",
    applies: mentions_sadness_or_fear,
    focus_areas: &[
        "Emotional regulation & comfort building",
        "Anxiety management & confidence",
    ],
    goals: GoalSource::Fixed(&[
        "Build emotional security through consistent routines and positive interactions",
        "Develop coping strategies for managing anxiety and fear responses",
    ]),
};

pub const FRUSTRATION_RULESET: Ruleset = Ruleset {
    name: "emotion_frustration",
    applies: mentions_anger_or_disgust,
    focus_areas: &[
        "Emotional expression & behavioral management",
        "Frustration tolerance & problem-solving",
    ],
    goals: GoalSource::Fixed(&[
        "Learn appropriate ways to express frustration and seek help when needed",
        "Develop problem-solving skills to reduce challenging behaviors",
    ]),
};

pub const JOY_RULESET: Ruleset = Ruleset {
    name: "emotion_joy",
    applies: mentions_happiness,
    focus_areas: &[
        "Positive engagement & motivation enhancement",
        "Social connection & relationship building",
    ],
    goals: GoalSource::Fixed(&[
        "Use natural interests and joy to enhance learning opportunities",
        "Build positive relationships through shared enjoyable activities",
    ]),
};

pub const DISTRESS_ACTIVITIES: ActivityRule = ActivityRule {
    name: "emotion_distress",
    applies: mentions_distress,
    activities: &[
        "Emotional Regulation and Coping Skills: Practice deep breathing exercises using bubbles, pinwheels, or feathers for 5-10 minutes daily. Create a calm-down corner with soft blankets, favorite stuffed animals, and soothing music. Teach simple emotional vocabulary using feeling faces and help child identify emotions throughout the day. Establish predictable comfort routines during difficult moments.",
    ],
};

pub const JOY_ACTIVITIES: ActivityRule = ActivityRule {
    name: "emotion_joy",
    applies: mentions_happiness,
    activities: &[
        "Positive Emotion Enhancement Activities: Build on child's natural joy by incorporating favorite activities into learning opportunities. Create celebration rituals for small achievements with special songs, dances, or high-fives. Design joyful interaction games based on child's interests, such as favorite character role-play, preferred music and movement, or special tickle games that encourage social connection.",
    ],
};

pub fn mentions_sadness_or_fear(input: &NormalizedIntake) -> bool {
    contains_any(&input.blob, &["sad", "fear"])
}

pub fn mentions_anger_or_disgust(input: &NormalizedIntake) -> bool {
    contains_any(&input.blob, &["angry", "disgust"])
}

pub fn mentions_happiness(input: &NormalizedIntake) -> bool {
    input.blob_contains("happy")
}

/// Any of sadness, fear, or anger; disgust alone does not qualify.
pub fn mentions_distress(input: &NormalizedIntake) -> bool {
    contains_any(&input.blob, &["sad", "fear", "angry"])
}
