//! Error types surfaced by the library
//!
//! GPA arithmetic never fails; only document decoding, file access and
//! session edits report errors.

use crate::core::ids::CourseId;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn external data into a transcript
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Valid JSON that isn't shaped like a list of semesters
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// Text that isn't JSON at all
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The file couldn't be read or written
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}

impl DocumentError {
    /// Build an I/O error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the content was rejected (as opposed to the file being unreadable)
    #[must_use]
    pub const fn is_invalid_content(&self) -> bool {
        matches!(self, Self::Malformed(_) | Self::Json(_))
    }
}

/// Failure to apply an edit to the open transcript
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// No semester at this 1-based position
    #[error("No semester #{0}")]
    SemesterNotFound(usize),

    /// No course with this identifier
    #[error("No course with id '{0}'")]
    CourseNotFound(CourseId),

    /// Credits above the configured bound
    #[error("Credits must be between 0 and {max}, got {credits}")]
    CreditsOutOfRange {
        /// Rejected value
        credits: u32,
        /// Configured upper bound
        max: u32,
    },
}
