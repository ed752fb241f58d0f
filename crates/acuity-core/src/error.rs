use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The submitted answer payload is not a key→value mapping at all.
    /// This is the only condition that aborts an evaluation.
    #[error("invalid answer payload: {0}")]
    InvalidInput(String),
}
