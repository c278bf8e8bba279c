use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Browser storage error: {0}")]
    StorageError(String),

    #[error("Browser storage is unavailable")]
    StorageUnavailable,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
