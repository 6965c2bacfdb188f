//! screener-engine
//!
//! Rule-based recommendation generation. Pure computation: every call owns
//! its own RNG, goal and activity lists, so generations never share state.

pub mod context;
pub mod dedup;
pub mod emotion;
pub mod engine;
pub mod fallback;
pub mod normalize;
pub mod rng;
pub mod rules;

pub use engine::{Engine, EngineOptions};
pub use rng::EngineSeed;
