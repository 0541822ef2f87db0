use thiserror::Error;

/// Failures the use case handlers report to the shell. None of them is fatal:
/// the shell keeps its last-known-good state and only shows a message for
/// `InvalidInput`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    #[error("no signed-in identity")]
    NoIdentity,

    #[error("labour entry not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("store failure: {0}")]
    StoreFailure(String),
}
