//! Error taxonomy for the fixture engine.

use thiserror::Error;

/// Errors raised by the fixture driver.
///
/// Backend failures are never swallowed: prepare and execute errors carry
/// the offending statement text so a failing fixture load can be diagnosed
/// from the message alone. The driver never retries on its own.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Unknown backend tag, or a handle that failed the capability check
    /// at construction. Fatal, raised immediately.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The backend could not prepare the statement text.
    #[error("failed to prepare statement `{statement}`: {source}")]
    PrepareFailed {
        statement: String,
        source: rusqlite::Error,
    },

    /// The backend failed while executing a prepared statement
    /// (constraint violation, missing table, etc.).
    #[error("failed to execute statement `{statement}`: {source}")]
    ExecutionFailed {
        statement: String,
        source: rusqlite::Error,
    },

    /// Caller supplied arguments that are rejected before any backend
    /// interaction, e.g. an update with no data columns.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
