//! Seeded pseudo-randomness for a single generation call.
//!
//! A linear-congruential generator (`state = (state * 9301 + 49297) % 233280`)
//! seeded from a hash of the intake plus the current second. The same intake
//! submitted within the same second gets the same stream; a later submission
//! gets a different one.

use screener_core::models::intake::IntakeRecord;

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233_280;

/// Seeds are folded into `0..SEED_SPACE`.
const SEED_SPACE: i64 = 1000;

/// Seed for one generation call. Never persisted or reused across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineSeed(u32);

impl EngineSeed {
    /// An explicit seed, mainly for tests and replays.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Derive a seed from the record's canonical JSON and a seconds tick.
    pub fn from_record(record: &IntakeRecord, tick: i64) -> Self {
        let text = serde_json::to_string(record).unwrap_or_default();
        Self::fold(i64::from(string_hash(&text)), tick)
    }

    /// Derive a seed from raw bytes (e.g. an uploaded photo) and a seconds tick.
    pub fn from_bytes(bytes: &[u8], tick: i64) -> Self {
        let hash = bytes.iter().fold(0i32, |h, b| mix(h, i32::from(*b)));
        Self::fold(i64::from(hash), tick)
    }

    /// Seed from the record and the current wall-clock second.
    pub fn now(record: &IntakeRecord) -> Self {
        Self::from_record(record, jiff::Timestamp::now().as_second())
    }

    fn fold(hash: i64, tick: i64) -> Self {
        Self(((hash + tick).abs() % SEED_SPACE) as u32)
    }
}

/// 32-bit rolling string hash (`h * 31 + unit`) over UTF-16 code units.
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |h, unit| mix(h, i32::from(unit)))
}

fn mix(h: i32, unit: i32) -> i32 {
    h.wrapping_shl(5).wrapping_sub(h).wrapping_add(unit)
}

/// Deterministic generator driven by an [`EngineSeed`].
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: EngineSeed) -> Self {
        Self {
            state: u64::from(seed.value()),
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn index_below(&mut self, bound: usize) -> usize {
        ((self.next_f64() * bound as f64).floor() as usize).min(bound - 1)
    }

    /// Fisher–Yates shuffle into a new vector; every element appears once.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self.index_below(i + 1);
            shuffled.swap(i, j);
        }
        shuffled
    }
}
