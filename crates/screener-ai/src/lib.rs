//! screener-ai
//!
//! Optional external text model for recommendations, with the rule engine
//! as the fallback for every failure.

pub mod client;
pub mod error;
pub mod prompt;
pub mod recommend;

pub use client::{GeminiClient, GeminiConfig, TextGenerator};
pub use recommend::{Generation, Recommender};
