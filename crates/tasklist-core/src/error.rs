use thiserror::Error;

#[derive(Debug, Error)]
pub enum TasklistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
