//! Repair pass run on every transcript that comes from outside the process
//!
//! Fills in what older or hand-edited files lack so the rest of the tool can
//! rely on it: every course gets an identifier unique across the whole
//! transcript, and every semester gets a name. Existing identifiers are never
//! rewritten (except later copies of a duplicated one) and nothing is
//! reordered. Running the pass twice changes nothing the second time.

use crate::core::ids::CourseId;
use crate::core::models::{Semester, Transcript};
use crate::debug;
use std::collections::HashSet;

/// What a normalization pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Courses that had no identifier and received one
    pub ids_assigned: usize,
    /// Courses whose identifier repeated an earlier one and was re-issued
    pub duplicate_ids_replaced: usize,
    /// Semesters that had no name and received `Semester N`
    pub semester_names_filled: usize,
}

impl NormalizeReport {
    /// Whether the transcript was already normalized
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.ids_assigned == 0
            && self.duplicate_ids_replaced == 0
            && self.semester_names_filled == 0
    }
}

/// Normalize a transcript, returning the repaired value
#[must_use]
pub fn normalize(mut transcript: Transcript) -> Transcript {
    normalize_in_place(&mut transcript);
    transcript
}

/// Normalize a transcript in place
pub fn normalize_in_place(transcript: &mut Transcript) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    // Everything already present is off limits for fresh ids, including ids
    // that appear later in the document than the course being repaired.
    let mut taken = transcript.course_ids();
    let mut seen: HashSet<CourseId> = HashSet::with_capacity(taken.len());

    for (index, semester) in transcript.semesters.iter_mut().enumerate() {
        if semester.name.trim().is_empty() {
            semester.name = Semester::default_name(index);
            report.semester_names_filled += 1;
        }

        for course in &mut semester.courses {
            let previous = match course.id.take() {
                Some(id) if !seen.contains(&id) => {
                    seen.insert(id.clone());
                    course.id = Some(id);
                    continue;
                }
                other => other,
            };

            let fresh = CourseId::generate(&taken);
            taken.insert(fresh.clone());
            seen.insert(fresh.clone());
            if let Some(duplicate) = previous {
                debug!("Re-issuing duplicate course id {duplicate} as {fresh}");
                report.duplicate_ids_replaced += 1;
            } else {
                report.ids_assigned += 1;
            }
            course.id = Some(fresh);
        }
    }

    if !report.is_clean() {
        debug!(
            "Normalized transcript: {} ids assigned, {} duplicates re-issued, {} names filled",
            report.ids_assigned, report.duplicate_ids_replaced, report.semester_names_filled
        );
    }

    report
}

/// Whether every course has an identifier and no identifier repeats
#[must_use]
pub fn has_unique_ids(transcript: &Transcript) -> bool {
    let mut seen = HashSet::new();
    transcript
        .courses()
        .all(|course| course.id.as_ref().is_some_and(|id| seen.insert(id)))
}
