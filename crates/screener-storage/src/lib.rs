//! screener-storage
//!
//! Object storage on the local filesystem. Keys are `/`-separated paths
//! relative to a data directory.

pub mod error;
pub mod objects;
pub mod records;
