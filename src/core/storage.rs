//! Canonical JSON document format
//!
//! A document on disk is a bare list of semesters, each `{name, courses}`,
//! pretty-printed with 4-space indentation. Every load goes through the
//! normalizer, so legacy files without course ids come back with ids filled in.

use crate::core::errors::DocumentError;
use crate::core::models::Transcript;
use crate::core::normalizer::{normalize_in_place, NormalizeReport};
use crate::{debug, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Serialize a transcript to its canonical text form
///
/// # Errors
/// Returns [`DocumentError::Json`] if serialization fails
pub fn to_json_string(transcript: &Transcript) -> Result<String, DocumentError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    transcript.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Decode and normalize document text
///
/// # Errors
/// Returns [`DocumentError::Json`] or [`DocumentError::Malformed`] when the
/// text isn't a list of semesters
pub fn from_json_str(text: &str) -> Result<(Transcript, NormalizeReport), DocumentError> {
    let mut transcript = Transcript::from_json_str(text)?;
    let report = normalize_in_place(&mut transcript);
    Ok((transcript, report))
}

/// Write a transcript to `path`, replacing any existing file atomically
///
/// The document is written to a sibling temp file, flushed, then renamed over
/// the target so a crash never leaves a half-written document behind.
///
/// # Errors
/// Returns [`DocumentError::Io`] if any filesystem step fails
pub fn save(path: &Path, transcript: &Transcript) -> Result<(), DocumentError> {
    let json = to_json_string(transcript)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DocumentError::io(parent, e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let written = write_file(&temp_path, &json)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| DocumentError::io(path, e)));
    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written?;

    debug!(
        "Saved {} semesters to {}",
        transcript.semester_count(),
        path.display()
    );
    Ok(())
}

/// Create `path` with `json` plus a trailing newline, flushed to disk
fn write_file(path: &Path, json: &str) -> Result<(), DocumentError> {
    let mut file = File::create(path).map_err(|e| DocumentError::io(path, e))?;
    file.write_all(json.as_bytes())
        .and_then(|()| file.write_all(b"\n"))
        .and_then(|()| file.sync_all())
        .map_err(|e| DocumentError::io(path, e))
}

/// Read, decode and normalize the document at `path`
///
/// # Errors
/// Returns [`DocumentError::Io`] if the file can't be read, otherwise any
/// decoding error from [`from_json_str`]
pub fn load(path: &Path) -> Result<(Transcript, NormalizeReport), DocumentError> {
    let text = fs::read_to_string(path).map_err(|e| DocumentError::io(path, e))?;
    let (transcript, report) = from_json_str(&text)?;
    if !report.is_clean() {
        info!(
            "Repaired {} while loading: {} ids assigned, {} duplicate ids re-issued, \
             {} semester names filled",
            path.display(),
            report.ids_assigned,
            report.duplicate_ids_replaced,
            report.semester_names_filled
        );
    }
    Ok((transcript, report))
}

/// Like [`load`], but a missing file yields an empty transcript
///
/// # Errors
/// Same as [`load`] for every failure other than the file not existing
pub fn load_or_default(path: &Path) -> Result<(Transcript, NormalizeReport), DocumentError> {
    if !path.exists() {
        debug!("No document at {}, starting empty", path.display());
        return Ok((Transcript::new(), NormalizeReport::default()));
    }
    load(path)
}

/// Open a working document that is edited in place across runs
///
/// Repairs made while loading are written straight back, so ids assigned
/// here are the ones later runs read.
///
/// # Errors
/// Same as [`load_or_default`], plus [`save`] failures when a repair is stored
pub fn open_working(path: &Path) -> Result<Transcript, DocumentError> {
    let (transcript, report) = load_or_default(path)?;
    if !report.is_clean() {
        save(path, &transcript)?;
        debug!("Stored repaired document at {}", path.display());
    }
    Ok(transcript)
}
