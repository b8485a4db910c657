use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Image could not be decoded: {0}")]
    DecodeError(String),

    #[error("Object detector failed: {0}")]
    DetectorFailure(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Recipe corpus unavailable: {0}")]
    CorpusUnavailable(String),

    #[error("History file is corrupted: {0}")]
    HistoryCorrupted(String),

    #[error("History storage error: {0}")]
    HistoryStorage(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}
