pub mod analyze;
pub mod emotion;
pub mod health;
pub mod records;
