//! Generic content used when the rulesets leave the result short.

use screener_core::models::recommendation::FOCUS_AREA_CAP;

use crate::context::GenerationContext;

/// Fewer goals than this after the rulesets triggers the developmental set.
pub const MIN_GOALS: usize = 3;

/// Fewer focus areas than this triggers the default list.
pub const MIN_FOCUS_AREAS: usize = 4;

pub const NOTES: &str = "Comprehensive early intervention recommended: Multi-disciplinary approach including speech therapy, occupational therapy, behavioral support, and family training for optimal developmental outcomes.";

pub const DEVELOPMENTAL_GOALS: [&str; 3] = [
    "Improve daily living skills appropriate for chronological age",
    "Enhance cognitive flexibility and adaptability to routine changes",
    "Strengthen family bonding through structured parent-child interaction time",
];

/// Used only when goal top-up is enabled.
pub const GENERIC_GOALS: [&str; 8] = [
    "Foster independence in age-appropriate self-care tasks",
    "Enhance cognitive flexibility through problem-solving games",
    "Build resilience and adaptability to environmental changes",
    "Develop motor planning skills through purposeful movement activities",
    "Strengthen attention span during preferred learning activities",
    "Cultivate positive peer interactions in structured settings",
    "Improve executive functioning through routine-based learning",
    "Support emotional intelligence development through storytelling",
];

pub const GENERIC_ACTIVITIES: [&str; 8] = [
    "Family Connection and Memory Building: Create personalized photo albums with family pictures, narrating stories about each person and special memories. Practice looking at faces, naming family members, and sharing simple stories. Use these albums for social referencing and conversation practice during quiet time together.",
    "Life Skills Through Cooking Activities: Engage child in simple food preparation like washing fruits, stirring ingredients, or decorating cookies. This provides sensory input, fine motor practice, following directions, and social interaction. Start with 15-20 minute sessions and gradually increase as attention span develops.",
    "Nature-Based Learning and Exploration: Take short outdoor walks to collect leaves, rocks, or flowers, then practice sorting by color, size, or texture. This combines sensory input, vocabulary building, and following directions. Create nature journals with drawings or photos of discoveries to extend the learning experience.",
    "Creative Arts for Self-Expression: Provide various art materials like finger paints, clay, markers, and textured papers for creative expression. Focus on the process rather than product, encouraging exploration and communication about colors, textures, and preferences. Use art time for vocabulary building and social interaction.",
    "Construction and Problem-Solving Play: Use building blocks, puzzles, or shape sorters to develop fine motor skills, spatial awareness, and problem-solving abilities. Start with simple tasks and gradually increase complexity. Provide verbal encouragement and help child communicate about their constructions.",
    "Music and Rhythm Development: Incorporate simple instruments like drums, shakers, or bells into daily routines. Practice imitation, turn-taking, and following rhythmic patterns. Use music for transitions, calming, and social engagement. Sing familiar songs and encourage child participation through actions or sounds.",
    "Imaginative Play and Social Scripts: Use dolls, action figures, or puppets to act out daily routines, social situations, and problem-solving scenarios. Practice greetings, sharing, asking for help, and expressing needs through play. This helps develop social understanding and communication skills in a low-pressure environment.",
    "Daily Routine Structure and Independence: Create visual schedules with pictures showing daily activities like meals, play, bath time, and bedtime. Practice following the schedule with support, celebrating completion of each activity. This builds predictability, reduces anxiety, and develops independence skills gradually.",
];

pub const DEFAULT_FOCUS_AREAS: [&str; 8] = [
    "Communication & language development",
    "Social interaction & peer relationships",
    "Behavioral regulation & emotional management",
    "Sensory processing & environmental adaptation",
    "Daily living skills & independence",
    "Family support & caregiver training",
    "Play skills & social imagination",
    "Academic readiness & learning support",
];

/// Offer the developmental goals when the rulesets produced fewer than
/// [`MIN_GOALS`].
pub fn ensure_minimum_goals(ctx: &mut GenerationContext) {
    if ctx.goals.len() >= MIN_GOALS {
        return;
    }
    for goal in DEVELOPMENTAL_GOALS {
        ctx.goals.offer(goal);
    }
}

/// Offer generic goals until the goal list is full or the list runs out.
pub fn top_up_goals(ctx: &mut GenerationContext) {
    for goal in GENERIC_GOALS {
        if ctx.goals.remaining() == 0 {
            break;
        }
        ctx.goals.offer(goal);
    }
}

/// Offer generic activities until the activity list is full.
pub fn fill_activities(ctx: &mut GenerationContext) {
    for activity in GENERIC_ACTIVITIES {
        if ctx.activities.is_full() {
            break;
        }
        ctx.activities.offer(activity);
    }
}

/// Collapse duplicate labels (first occurrence wins), pad a short list with
/// defaults, and cap the result.
///
/// A default is skipped when its first word already appears inside an
/// existing label, so "Communication & language development" is not added
/// next to "Non-verbal communication improvement".
pub fn complete_focus_areas(raw: Vec<String>) -> Vec<String> {
    let mut areas: Vec<String> = Vec::with_capacity(FOCUS_AREA_CAP);
    for area in raw {
        if !areas.contains(&area) {
            areas.push(area);
        }
    }

    if areas.len() < MIN_FOCUS_AREAS {
        for default in DEFAULT_FOCUS_AREAS {
            if areas.len() >= FOCUS_AREA_CAP {
                break;
            }
            let lead = default
                .split(' ')
                .next()
                .unwrap_or(default)
                .to_lowercase();
            if !areas.iter().any(|a| a.to_lowercase().contains(&lead)) {
                areas.push(default.to_string());
            }
        }
    }

    areas.truncate(FOCUS_AREA_CAP);
    areas
}
