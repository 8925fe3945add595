use thiserror::Error;

/// Errors surfaced by the demo shell. The component kit itself cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serde(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
