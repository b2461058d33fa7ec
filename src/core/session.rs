//! Editing session over one transcript
//!
//! The session is the only owner of the open document. Every mutation goes
//! through it, so new courses always receive ids unique within the document
//! and loads never leave a half-replaced document behind.

use crate::core::config::Config;
use crate::core::errors::{DocumentError, SessionError};
use crate::core::gpa::{GpaCalculator, NaPolicy, SemesterSummary};
use crate::core::ids::CourseId;
use crate::core::models::course::DEFAULT_CREDITS;
use crate::core::models::{Course, Grade, GradeMark, Semester, Transcript};
use crate::core::normalizer::{normalize_in_place, NormalizeReport};
use crate::core::storage;
use crate::debug;

/// Credits bound applied when the config doesn't set one
pub const DEFAULT_MAX_CREDITS: u32 = 10;

/// Settings that shape how a session edits its document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// How `N/A` courses enter the GPA
    pub na_policy: NaPolicy,
    /// Largest credit count accepted by edits
    pub max_credits: u32,
    /// Whether a new semester starts with one default course
    pub seed_semester_course: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            na_policy: NaPolicy::default(),
            max_credits: DEFAULT_MAX_CREDITS,
            seed_semester_course: false,
        }
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            na_policy: config.na_policy(),
            max_credits: config.max_credits().unwrap_or(DEFAULT_MAX_CREDITS),
            seed_semester_course: config.grading.seed_semester_course,
        }
    }
}

/// Fields for a new course; anything left `None` takes the default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCourse {
    /// Course name (default empty)
    pub name: Option<String>,
    /// Grade (default `O`)
    pub grade: Option<Grade>,
    /// Credits (default 3)
    pub credits: Option<u32>,
}

/// An open transcript plus the settings used to edit it
#[derive(Debug, Clone, Default)]
pub struct Session {
    transcript: Transcript,
    options: SessionOptions,
}

impl Session {
    /// Start a session with an empty document
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Self {
            transcript: Transcript::new(),
            options,
        }
    }

    /// Start a session over an existing document, normalizing it first
    #[must_use]
    pub fn with_transcript(mut transcript: Transcript, options: SessionOptions) -> Self {
        normalize_in_place(&mut transcript);
        Self {
            transcript,
            options,
        }
    }

    /// The open document
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Consume the session, returning its document
    #[must_use]
    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }

    /// Settings in effect
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Calculator bound to this session's `N/A` policy
    #[must_use]
    pub const fn calculator(&self) -> GpaCalculator {
        GpaCalculator::new(self.options.na_policy)
    }

    /// Append a semester and return its 1-based position
    ///
    /// Without a name the semester is called `Semester N`.
    pub fn add_semester(&mut self, name: Option<&str>) -> usize {
        let position = self.transcript.semester_count() + 1;
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| Semester::default_name(position - 1), str::to_string);

        let mut semester = Semester::new(name);
        if self.options.seed_semester_course {
            semester.add_course(Course::with_defaults(self.fresh_id()));
        }
        debug!("Adding semester #{position} '{}'", semester.name);
        self.transcript.add_semester(semester);
        position
    }

    /// Remove the semester at a 1-based position along with its courses
    ///
    /// # Errors
    /// Returns [`SessionError::SemesterNotFound`] if there is no such semester
    pub fn remove_semester(&mut self, position: usize) -> Result<Semester, SessionError> {
        let index = self.index_of(position)?;
        self.transcript
            .remove_semester(index)
            .ok_or(SessionError::SemesterNotFound(position))
    }

    /// Rename the semester at a 1-based position
    ///
    /// A blank name resets it to `Semester N`.
    ///
    /// # Errors
    /// Returns [`SessionError::SemesterNotFound`] if there is no such semester
    pub fn rename_semester(&mut self, position: usize, name: &str) -> Result<(), SessionError> {
        let index = self.index_of(position)?;
        let name = name.trim();
        self.transcript.semesters[index].name = if name.is_empty() {
            Semester::default_name(index)
        } else {
            name.to_string()
        };
        Ok(())
    }

    /// Add a course to the semester at a 1-based position
    ///
    /// # Errors
    /// Returns [`SessionError::SemesterNotFound`] for a bad position and
    /// [`SessionError::CreditsOutOfRange`] for credits above the bound
    pub fn add_course(
        &mut self,
        position: usize,
        new: NewCourse,
    ) -> Result<CourseId, SessionError> {
        let index = self.index_of(position)?;
        let credits = new.credits.unwrap_or(DEFAULT_CREDITS);
        self.check_credits(credits)?;

        let id = self.fresh_id();
        let course = Course::new(
            id.clone(),
            new.name.unwrap_or_default(),
            new.grade.unwrap_or_default(),
            credits,
        );
        self.transcript.semesters[index].add_course(course);
        debug!("Added course {id} to semester #{position}");
        Ok(id)
    }

    /// Remove a course wherever it lives
    ///
    /// # Errors
    /// Returns [`SessionError::CourseNotFound`] if no course has this id
    pub fn remove_course(&mut self, id: &CourseId) -> Result<Course, SessionError> {
        self.transcript
            .remove_course(id)
            .ok_or_else(|| SessionError::CourseNotFound(id.clone()))
    }

    /// Change a course's name
    ///
    /// # Errors
    /// Returns [`SessionError::CourseNotFound`] if no course has this id
    pub fn set_course_name(&mut self, id: &CourseId, name: &str) -> Result<(), SessionError> {
        self.course_mut(id)?.name = name.to_string();
        Ok(())
    }

    /// Change a course's grade
    ///
    /// # Errors
    /// Returns [`SessionError::CourseNotFound`] if no course has this id
    pub fn set_course_grade(&mut self, id: &CourseId, grade: Grade) -> Result<(), SessionError> {
        self.course_mut(id)?.grade = Some(GradeMark::Known(grade));
        Ok(())
    }

    /// Change a course's credits, enforcing the configured bound
    ///
    /// # Errors
    /// Returns [`SessionError::CreditsOutOfRange`] above the bound (the course
    /// keeps its old value) or [`SessionError::CourseNotFound`]
    pub fn set_course_credits(&mut self, id: &CourseId, credits: u32) -> Result<(), SessionError> {
        self.check_credits(credits)?;
        self.course_mut(id)?.credits = Some(credits);
        Ok(())
    }

    /// Drop every semester
    pub fn reset(&mut self) {
        debug!(
            "Resetting session ({} semesters)",
            self.transcript.semester_count()
        );
        self.transcript.clear();
    }

    /// Swap in a new document after normalizing it
    pub fn replace(&mut self, mut transcript: Transcript) -> NormalizeReport {
        let report = normalize_in_place(&mut transcript);
        self.transcript = transcript;
        report
    }

    /// Replace the document with decoded JSON text
    ///
    /// # Errors
    /// Returns the decoding error and leaves the current document untouched
    pub fn load_json(&mut self, text: &str) -> Result<NormalizeReport, DocumentError> {
        let (transcript, report) = storage::from_json_str(text)?;
        self.transcript = transcript;
        Ok(report)
    }

    /// Add imported course records to a semester and normalize
    ///
    /// Courses go into the semester named `semester_name` if one exists,
    /// otherwise into a new semester with that name. Imported records have
    /// their ids assigned here.
    ///
    /// # Returns
    /// The 1-based position of the receiving semester
    pub fn import_courses(&mut self, semester_name: &str, courses: Vec<Course>) -> usize {
        let existing = self
            .transcript
            .semesters
            .iter()
            .position(|s| s.name == semester_name);

        let index = existing.unwrap_or_else(|| {
            self.transcript.add_semester(Semester::new(semester_name))
        });
        let count = courses.len();
        self.transcript.semesters[index].courses.extend(courses);
        normalize_in_place(&mut self.transcript);

        debug!("Imported {count} courses into semester #{}", index + 1);
        index + 1
    }

    /// GPA of the semester at a 1-based position
    ///
    /// # Errors
    /// Returns [`SessionError::SemesterNotFound`] if there is no such semester
    pub fn semester_gpa(&self, position: usize) -> Result<f64, SessionError> {
        let index = self.index_of(position)?;
        Ok(self
            .calculator()
            .semester_gpa(&self.transcript.semesters[index].courses))
    }

    /// CGPA across the whole document
    #[must_use]
    pub fn cumulative_gpa(&self) -> f64 {
        self.calculator().cumulative_gpa(&self.transcript)
    }

    /// Per-semester summaries in display order
    #[must_use]
    pub fn summaries(&self) -> Vec<SemesterSummary> {
        self.calculator().summaries(&self.transcript)
    }

    fn index_of(&self, position: usize) -> Result<usize, SessionError> {
        if position == 0 || position > self.transcript.semester_count() {
            return Err(SessionError::SemesterNotFound(position));
        }
        Ok(position - 1)
    }

    const fn check_credits(&self, credits: u32) -> Result<(), SessionError> {
        if credits > self.options.max_credits {
            return Err(SessionError::CreditsOutOfRange {
                credits,
                max: self.options.max_credits,
            });
        }
        Ok(())
    }

    fn course_mut(&mut self, id: &CourseId) -> Result<&mut Course, SessionError> {
        self.transcript
            .course_mut(id)
            .ok_or_else(|| SessionError::CourseNotFound(id.clone()))
    }

    fn fresh_id(&self) -> CourseId {
        CourseId::generate(&self.transcript.course_ids())
    }
}
