use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("emotion estimate is inconsistent: {0}")]
    EmotionInvariant(String),
}
