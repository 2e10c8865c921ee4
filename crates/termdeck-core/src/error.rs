//! Error types for the record store and quiz engine.
//!
//! Nothing here is fatal: every failure is returned to the caller so the
//! shell can decide what to tell the user.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`RecordStore`](crate::store::RecordStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was empty after trimming.
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// A field held a line break, which the line-based file cannot store.
    #[error("{0} must not contain line breaks")]
    LineBreak(&'static str),

    /// The entry would be written as a header line and skipped on load.
    #[error("entry matches the column header")]
    HeaderRow,

    /// The backing file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns `true` if the caller supplied invalid input (as opposed to an
    /// environment failure).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::MissingField(_) | StoreError::LineBreak(_) | StoreError::HeaderRow
        )
    }
}

/// Errors returned when a quiz session is driven out of order or built
/// without the inputs it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The pool of entries was empty.
    #[error("quiz pool is empty")]
    EmptyPool,

    /// Zero questions were requested.
    #[error("question count must be at least 1")]
    NoQuestions,

    /// A new question was requested while the previous one awaits a judgment.
    #[error("current question has not been answered yet")]
    AwaitingJudgment,

    /// A judgment was submitted with no question pending.
    #[error("no question is awaiting a judgment")]
    NoPendingQuestion,
}
