//! Duplicate guards for therapy goals and activities.
//!
//! Goals go through three tiers (exact, key phrase, word overlap) plus a
//! membership set. Activities are long free text and only get an exact,
//! case-insensitive check.

use std::collections::HashSet;

use screener_core::models::recommendation::{ACTIVITY_CAP, GOAL_CAP};
use tracing::debug;

/// Clinical phrases that mark two goals as covering the same ground.
pub const KEY_PHRASES: [&str; 12] = [
    "social routines",
    "daily activities",
    "social skills",
    "sensory activities",
    "communication",
    "eye contact",
    "sensory processing",
    "emotional regulation",
    "turn taking",
    "joint attention",
    "social referencing",
    "encourage social",
];

/// Word-overlap ratio above which a goal is a near duplicate.
pub const SIMILARITY_THRESHOLD: f64 = 0.30;

/// Words this short are ignored by the overlap check.
const MIN_SIGNIFICANT_LEN: usize = 3;

/// Why a goal candidate was turned away.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    Exact,
    KeyPhrase(&'static str),
    Similar(f64),
    AlreadySeen,
    Full,
}

/// Lowercase, strip `.,!?;:-`, collapse whitespace.
pub fn normalize_goal(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '-'))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Share of significant words the two normalized goals have in common,
/// relative to the longer of the two.
pub fn word_overlap(candidate: &str, existing: &str) -> f64 {
    let candidate_words = significant_words(candidate);
    let existing_words = significant_words(existing);

    let longest = candidate_words.len().max(existing_words.len());
    if longest == 0 {
        return 0.0;
    }

    let common = candidate_words
        .iter()
        .filter(|w| existing_words.contains(w))
        .count();
    common as f64 / longest as f64
}

fn significant_words(normalized: &str) -> Vec<&str> {
    normalized
        .split(' ')
        .filter(|w| w.chars().count() >= MIN_SIGNIFICANT_LEN)
        .collect()
}

/// Accepted goals for one generation call, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct GoalList {
    goals: Vec<String>,
    seen: HashSet<String>,
}

impl GoalList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every tier against `candidate` without accepting it.
    pub fn check(&self, candidate: &str) -> Result<(), Rejection> {
        let normalized = normalize_goal(candidate);

        for existing in &self.goals {
            let existing = normalize_goal(existing);

            if existing == normalized {
                return Err(Rejection::Exact);
            }

            if let Some(phrase) = KEY_PHRASES
                .into_iter()
                .find(|p| normalized.contains(p) && existing.contains(p))
            {
                return Err(Rejection::KeyPhrase(phrase));
            }

            let overlap = word_overlap(&normalized, &existing);
            if overlap > SIMILARITY_THRESHOLD {
                return Err(Rejection::Similar(overlap));
            }
        }

        if self.seen.contains(&normalized) {
            return Err(Rejection::AlreadySeen);
        }

        if self.goals.len() >= GOAL_CAP {
            return Err(Rejection::Full);
        }

        Ok(())
    }

    /// Append `candidate` if it passes every tier. Returns whether it was added.
    pub fn offer(&mut self, candidate: &str) -> bool {
        match self.check(candidate) {
            Ok(()) => {
                self.seen.insert(normalize_goal(candidate));
                self.goals.push(candidate.to_string());
                debug!(count = self.goals.len(), goal = candidate, "goal accepted");
                true
            }
            Err(reason) => {
                debug!(?reason, goal = candidate, "goal rejected");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Slots left before the cap.
    pub fn remaining(&self) -> usize {
        GOAL_CAP.saturating_sub(self.goals.len())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.goals
    }

    pub fn into_vec(self) -> Vec<String> {
        self.goals
    }
}

/// Accepted activities for one generation call, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ActivityList {
    activities: Vec<String>,
    seen: HashSet<String>,
}

impl ActivityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unless an identical (case-insensitive) activity is present or
    /// the list is full.
    pub fn offer(&mut self, activity: &str) -> bool {
        let key = activity.to_lowercase();
        if self.is_full() || self.seen.contains(&key) {
            return false;
        }
        self.seen.insert(key);
        self.activities.push(activity.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.activities.len() >= ACTIVITY_CAP
    }

    pub fn as_slice(&self) -> &[String] {
        &self.activities
    }

    pub fn into_vec(self) -> Vec<String> {
        self.activities
    }
}
