use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("segment repository error: {0}")]
    Repository(String),
}
