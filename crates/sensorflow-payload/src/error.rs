use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("expected a JSON object at the top level, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid separator: {0}")]
    InvalidSeparator(String),

    #[error("json serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PayloadError>;
