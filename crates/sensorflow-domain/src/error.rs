use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid reading catalog: {0}")]
    InvalidCatalog(String),

    #[error("Payload decode error: {0}")]
    PayloadDecodeError(String),

    #[error("Payload transform error: {0}")]
    PayloadTransformError(String),

    #[error("Sink error: {0}")]
    SinkError(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
