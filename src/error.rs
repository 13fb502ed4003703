use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse duration: {0}")]
    InvalidDuration(String),

    #[error("Failed to read contest results: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize contest results: {0}")]
    Deserialization(#[from] serde_json::Error)
}
