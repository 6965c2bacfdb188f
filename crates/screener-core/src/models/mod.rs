pub mod emotion;
pub mod intake;
pub mod recommendation;
pub mod record;
