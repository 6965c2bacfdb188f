use super::{ActivityRule, AgeBand, GoalSource, Ruleset, contains_any};
use crate::normalize::NormalizedIntake;

pub const RULESET: Ruleset = Ruleset {
    name: "sensory",
    applies: sensory_concern,
    focus_areas: &[
        "Sensory processing & integration",
        "Self-regulation & coping strategies",
        "Environmental adaptation & tolerance",
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

pub const ACTIVITIES: ActivityRule = ActivityRule {
    name: "sensory",
    applies: mentions_sensory,
    activities: &[
        "Sensory Integration Therapy: Create sensory exploration bins with rice, beans, pasta, or sand for 10-15 minute sessions with supervision. Provide gentle deep pressure through hugs, weighted blankets, or compression activities. Offer calming sensory breaks with dim lighting, soft music, and favorite textures when child shows signs of overwhelm.",
        "Proprioceptive and Vestibular Activities: Incorporate daily movement including supervised swinging, gentle bouncing on therapy balls, or trampoline jumping for 10-20 minutes. Practice heavy work activities like carrying books, pushing/pulling toys, or helping with household tasks. Create obstacle courses with crawling, climbing, and balancing to improve body awareness and coordination.",
    ],
};

pub const EARLY_GOALS: [&str; 5] = [
    "Gradually introduce new textures and sensory experiences through play",
    "Create predictable sensory routines to build comfort and security",
    "Use calming sensory activities during daily transitions",
    "Explore different sensory materials in safe, structured environments",
    "Build sensory tolerance through gentle, graduated exposure",
];

pub const SCHOOL_GOALS: [&str; 5] = [
    "Build tolerance to various textures, sounds, and sensory inputs",
    "Develop self-regulation techniques for sensory overload",
    "Create and use sensory calming strategies during daily routines",
    "Practice sensory regulation skills in classroom environments",
    "Learn to communicate sensory needs to teachers and peers",
];

pub const TEEN_GOALS: [&str; 5] = [
    "Develop advanced self-awareness of sensory needs and triggers",
    "Learn independent sensory regulation strategies for different environments",
    "Build confidence in managing sensory challenges in social settings",
    "Create personal sensory toolkit for workplace and community settings",
    "Practice self-advocacy skills for sensory accommodations",
];

pub fn sensory_concern(input: &NormalizedIntake) -> bool {
    contains_any(&input.sensory_reactions, &["sensitive", "very", "overreact"])
}

pub fn mentions_sensory(input: &NormalizedIntake) -> bool {
    contains_any(&input.blob, &["sensory", "sensitive"])
}
