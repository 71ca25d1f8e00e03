//! Repository errors.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned by the race and event repositories.
#[derive(Error, Debug)]
pub enum RepoError {
    /// The underlying SQLite call failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// The database directory could not be created.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),
    /// No row exists with the requested ID.
    #[error("no record with id {0}")]
    NotFound(i64),
    /// A get request arrived without a usable ID.
    #[error("no ID passed")]
    MissingId,
    /// A stored advertised start time could not be parsed.
    #[error("invalid advertised_start_time {value:?} for id {id}")]
    InvalidTimestamp { id: i64, value: String },
    /// A previous holder of the connection panicked.
    #[error("database connection lock poisoned")]
    Poisoned,
}

/// Result alias for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

impl RepoError {
    /// HTTP status the API reports for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MissingId => StatusCode::BAD_REQUEST,
            Self::Database(_)
            | Self::Io(_)
            | Self::InvalidTimestamp { .. }
            | Self::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for RepoError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::Poisoned
    }
}
