//! Placeholder emotion estimate for an uploaded photo.
//!
//! There is no image inference here. The estimate is a random distribution
//! over the seven basic emotions, shaped so that it always satisfies
//! [`EmotionEstimate::check_invariants`].

use std::collections::BTreeMap;

use screener_core::models::emotion::{Emotion, EmotionEstimate};
use tracing::info;

use crate::rng::{EngineSeed, SeededRng};

/// Dominant share is drawn from `DOMINANT_MIN..DOMINANT_MIN + DOMINANT_SPAN`.
const DOMINANT_MIN: usize = 35;
const DOMINANT_SPAN: usize = 40;

/// Estimate for raw image bytes, seeded from the bytes and the current second.
pub fn estimate_from_image(image: &[u8]) -> EmotionEstimate {
    let now = jiff::Timestamp::now();
    let seed = EngineSeed::from_bytes(image, now.as_second());
    let mut rng = SeededRng::new(seed);

    let estimate = placeholder_estimate(&mut rng, now);
    info!(
        bytes = image.len(),
        dominant = estimate.dominant_emotion.as_str(),
        confidence = estimate.confidence,
        "placeholder emotion estimate"
    );
    estimate
}

/// Draw a dominant emotion and share, then spread the rest one point at a
/// time. Every other emotion gets at least one point and stays strictly
/// below the dominant share.
pub fn placeholder_estimate(rng: &mut SeededRng, at: jiff::Timestamp) -> EmotionEstimate {
    let dominant = Emotion::ALL[rng.index_below(Emotion::ALL.len())];
    let dominant_share = DOMINANT_MIN + rng.index_below(DOMINANT_SPAN);

    let others: Vec<Emotion> = Emotion::ALL
        .into_iter()
        .filter(|e| *e != dominant)
        .collect();
    let mut shares = vec![1usize; others.len()];

    let mut leftover = 100 - dominant_share - others.len();
    while leftover > 0 {
        let open: Vec<usize> = (0..shares.len())
            .filter(|i| shares[*i] + 1 < dominant_share)
            .collect();
        if open.is_empty() {
            break;
        }
        shares[open[rng.index_below(open.len())]] += 1;
        leftover -= 1;
    }

    let mut all_emotions: BTreeMap<Emotion, f64> = others
        .into_iter()
        .zip(shares)
        .map(|(e, share)| (e, share as f64))
        .collect();
    all_emotions.insert(dominant, dominant_share as f64);

    EmotionEstimate {
        dominant_emotion: dominant,
        confidence: dominant_share as f64,
        all_emotions,
        analysis_timestamp: Some(at),
    }
}
