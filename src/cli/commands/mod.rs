//! CLI command handlers for `gpajotter`.
//!
//! Each command is implemented in its own submodule. Commands that touch the
//! working document open it through [`Workspace`], apply their change and
//! save it back, so every invocation sees the previous one's edits.

pub mod config;
pub mod course;
pub mod document;
pub mod export;
pub mod ingest;
pub mod semester;
pub mod show;

use gpa_jotter::config::Config;
use gpa_jotter::core::session::{Session, SessionOptions};
use gpa_jotter::core::storage;
use gpa_jotter::{debug, error, verbose, warn};
use std::io::{self, Write};
use std::path::PathBuf;

/// Result type shared by handlers; the error is a ready-to-print message
pub type CommandResult = Result<(), String>;

/// The working document plus where it lives
pub struct Workspace {
    /// Session over the loaded document
    pub session: Session,
    /// Path of the working document
    pub path: PathBuf,
}

impl Workspace {
    /// Load the working document named by `paths.data_file`
    ///
    /// A missing file opens an empty document. Ids filled in while loading a
    /// legacy file are saved right away, even by read-only commands.
    pub fn open(config: &Config) -> Result<Self, String> {
        let path = PathBuf::from(&config.paths.data_file);
        verbose!("Working document: {}", path.display());
        let transcript = storage::open_working(&path).map_err(|e| {
            error!("Failed to open working document: {e}");
            format!("✗ Failed to open working document: {e}")
        })?;
        debug!(
            "Opened {} ({} semesters)",
            path.display(),
            transcript.semester_count()
        );

        Ok(Self {
            session: Session::with_transcript(transcript, SessionOptions::from(config)),
            path,
        })
    }

    /// An empty workspace at the configured path, ignoring what is on disk
    pub fn empty(config: &Config) -> Self {
        Self {
            session: Session::new(SessionOptions::from(config)),
            path: PathBuf::from(&config.paths.data_file),
        }
    }

    /// Like [`open`](Self::open), but an unreadable document is replaced by an empty one
    pub fn open_or_empty(config: &Config) -> Self {
        Self::open(config).unwrap_or_else(|message| {
            warn!("Starting from an empty document: {message}");
            Self::empty(config)
        })
    }

    /// Write the working document back
    pub fn save(&self) -> CommandResult {
        storage::save(&self.path, self.session.transcript()).map_err(|e| {
            error!("Failed to save working document: {e}");
            format!("✗ Failed to save working document: {e}")
        })
    }
}

/// Ask a yes/no question on stdin
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
