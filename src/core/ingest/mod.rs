//! Course records scraped from plain text
//!
//! Ingestion is best effort. Every line with a department code becomes either
//! a course record or an [`IngestIssue`]; a bad line never stops the batch.
//! Records come back without ids so they can go through the normalizer like
//! any other loaded data.

pub mod text_parser;

use crate::core::models::course::DEFAULT_CREDITS;
use crate::core::models::{Course, Grade};
use crate::core::session::DEFAULT_MAX_CREDITS;
use crate::{debug, warn};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use text_parser::{scan_line, CreditsToken};

/// Defaults applied to columns missing from a course line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Credits when the line has none
    pub default_credits: u32,
    /// Grade when the line has none
    pub default_grade: Grade,
    /// Lines with more credits than this are reported instead of imported
    pub max_credits: u32,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            default_credits: DEFAULT_CREDITS,
            default_grade: Grade::O,
            max_credits: DEFAULT_MAX_CREDITS,
        }
    }
}

/// Why a course line was not imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueReason {
    /// The credits column isn't a whole number
    InvalidCredits(String),
    /// The credits column is above the allowed maximum
    CreditsOutOfRange {
        /// Credits found on the line
        credits: u32,
        /// Allowed maximum
        max: u32,
    },
    /// The same course code appeared on an earlier line
    DuplicateCode(String),
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredits(raw) => write!(f, "credits '{raw}' are not a whole number"),
            Self::CreditsOutOfRange { credits, max } => {
                write!(f, "credits {credits} exceed the maximum of {max}")
            }
            Self::DuplicateCode(code) => write!(f, "course {code} already listed above"),
        }
    }
}

/// A course line that was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestIssue {
    /// 1-based line number in the input
    pub line_number: usize,
    /// The line as written (trimmed)
    pub line: String,
    /// What was wrong with it
    pub reason: IssueReason,
}

impl fmt::Display for IngestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line_number, self.reason, self.line)
    }
}

/// Result of scanning a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Imported records, in input order, without ids
    pub courses: Vec<Course>,
    /// Course lines that were skipped
    pub issues: Vec<IngestIssue>,
    /// Lines without a department code
    pub ignored_lines: usize,
}

impl IngestOutcome {
    /// Whether nothing course-like was found at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty() && self.issues.is_empty()
    }
}

/// Scan text for course lines
#[must_use]
pub fn ingest_text(text: &str, options: &IngestOptions) -> IngestOutcome {
    let mut outcome = IngestOutcome::default();
    let mut seen_codes: HashSet<String> = HashSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let Some(scanned) = scan_line(line) else {
            outcome.ignored_lines += 1;
            continue;
        };

        let issue = |reason| IngestIssue {
            line_number: index + 1,
            line: line.to_string(),
            reason,
        };

        let credits = match scanned.credits {
            None => options.default_credits,
            Some(CreditsToken::Whole(credits)) if credits <= options.max_credits => credits,
            Some(CreditsToken::Whole(credits)) => {
                outcome.issues.push(issue(IssueReason::CreditsOutOfRange {
                    credits,
                    max: options.max_credits,
                }));
                continue;
            }
            Some(CreditsToken::Invalid(raw)) => {
                outcome.issues.push(issue(IssueReason::InvalidCredits(raw)));
                continue;
            }
        };

        if !seen_codes.insert(scanned.code.clone()) {
            outcome
                .issues
                .push(issue(IssueReason::DuplicateCode(scanned.code)));
            continue;
        }

        let grade = scanned.grade.unwrap_or(options.default_grade);
        outcome
            .courses
            .push(Course::unassigned(scanned.course_name(), grade, credits));
    }

    for issue in &outcome.issues {
        warn!("Skipped {issue}");
    }
    debug!(
        "Ingested {} courses, {} issues, {} other lines",
        outcome.courses.len(),
        outcome.issues.len(),
        outcome.ignored_lines
    );
    outcome
}

/// Read a text file and scan it
///
/// # Errors
/// Returns the I/O error if the file can't be read
pub fn ingest_file(path: &Path, options: &IngestOptions) -> std::io::Result<IngestOutcome> {
    let text = fs::read_to_string(path)?;
    Ok(ingest_text(&text, options))
}
