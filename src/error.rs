//! Error types for copycat operations.

use std::io;
use std::path::PathBuf;

use crate::clipboard::ClipboardError;
use crate::size::ByteSize;

/// Result type alias for copycat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit code for any failure.
pub const EXIT_ERROR: u8 = 1;
/// Exit code when the user declined a confirmation prompt.
pub const EXIT_CANCELLED: u8 = 2;

/// Errors that can occur while moving content around.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File '{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' is not a regular file", .path.display())]
    NotRegularFile { path: PathBuf },

    #[error("File too large: {size} (max: {max})")]
    TooLarge {
        path: PathBuf,
        size: ByteSize,
        max: ByteSize,
    },

    #[error(transparent)]
    ClipboardUnavailable(#[from] ClipboardError),

    #[error("Failed to write '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {what}: {source}")]
    ReadFailed {
        what: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Usage(String),

    /// The user answered "no" to a confirmation prompt.
    #[error("Operation cancelled")]
    UserCancelled,
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::UserCancelled => EXIT_CANCELLED,
            _ => EXIT_ERROR,
        }
    }

    pub(crate) fn read_failed(what: impl Into<String>, source: io::Error) -> Self {
        Error::ReadFailed {
            what: what.into(),
            source,
        }
    }

    pub(crate) fn write_failed(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::WriteFailed {
            path: path.into(),
            source,
        }
    }
}
