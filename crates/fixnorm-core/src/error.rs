use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixnormError>;

#[derive(Debug, Error)]
pub enum FixnormError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
