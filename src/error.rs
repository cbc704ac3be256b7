//! Error types for the section engine

use std::path::PathBuf;

/// Errors surfaced by document I/O, history persistence and entry validation.
///
/// Parse anomalies and match misses are never errors: unrecognised lines stay
/// inert and a missing section simply leads to section creation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The document exceeds the configured size limit.
    #[error("file too large ({size} bytes, max {max}): {}", path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    /// The document exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The new document content could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The history log could not be persisted.
    #[error("history store {}: {message}", path.display())]
    History { path: PathBuf, message: String },

    /// A history entry to be restored was recorded for another document.
    #[error("history entry for {recorded} cannot be restored into {}", path.display())]
    ForeignSnapshot { path: PathBuf, recorded: String },

    /// An alias or export handed to the writer is not well formed.
    #[error("invalid entry: {0}")]
    InvalidEntry(String),
}

impl Error {
    /// True for the failures that happen before any parse is attempted.
    pub fn is_read_error(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. } | Error::TooLarge { .. } | Error::Read { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
