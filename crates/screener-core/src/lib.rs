//! screener-core
//!
//! Pure domain types, caller-side intake validation, and storage key
//! conventions. No I/O; this is the shared vocabulary of the Screener system.

pub mod error;
pub mod keys;
pub mod models;
pub mod validation;
