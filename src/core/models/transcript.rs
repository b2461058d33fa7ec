//! Transcript model: the whole document a student saves and loads

use super::course::Course;
use super::semester::Semester;
use crate::core::errors::DocumentError;
use crate::core::ids::CourseId;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// Ordered list of semesters; the unit of load and save
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    /// Semesters in display order
    pub semesters: Vec<Semester>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub const fn new() -> Self {
        Self {
            semesters: Vec::new(),
        }
    }

    /// Build a transcript from semesters
    #[must_use]
    pub const fn from_semesters(semesters: Vec<Semester>) -> Self {
        Self { semesters }
    }

    /// Decode a parsed JSON value.
    ///
    /// The top level must be an array of objects, and each object's `courses`
    /// (when present and not null) must be an array of objects. Field values
    /// inside a course are decoded leniently.
    ///
    /// # Errors
    /// Returns [`DocumentError::Malformed`] describing the first structural violation.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let Value::Array(items) = value else {
            return Err(DocumentError::Malformed(format!(
                "expected a list of semesters, found {}",
                kind_of(&value)
            )));
        };

        let semesters = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| decode_semester(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { semesters })
    }

    /// Decode JSON text; see [`from_value`](Self::from_value)
    ///
    /// # Errors
    /// Returns [`DocumentError::Json`] for invalid JSON and
    /// [`DocumentError::Malformed`] for structural violations.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Whether the transcript has no semesters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Number of semesters
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }

    /// Every course across all semesters, in display order
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.semesters.iter().flat_map(|s| s.courses.iter())
    }

    /// Total number of courses
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(Semester::course_count).sum()
    }

    /// Identifiers currently present
    #[must_use]
    pub fn course_ids(&self) -> HashSet<CourseId> {
        self.courses().filter_map(|c| c.id.clone()).collect()
    }

    /// Append a semester and return its 0-based index
    pub fn add_semester(&mut self, semester: Semester) -> usize {
        self.semesters.push(semester);
        self.semesters.len() - 1
    }

    /// Remove the semester at a 0-based index
    pub fn remove_semester(&mut self, index: usize) -> Option<Semester> {
        (index < self.semesters.len()).then(|| self.semesters.remove(index))
    }

    /// Locate a course: (semester index, course)
    #[must_use]
    pub fn find_course(&self, id: &CourseId) -> Option<(usize, &Course)> {
        self.semesters
            .iter()
            .enumerate()
            .find_map(|(index, semester)| semester.course(id).map(|course| (index, course)))
    }

    /// Locate a course for editing
    pub fn course_mut(&mut self, id: &CourseId) -> Option<&mut Course> {
        self.semesters.iter_mut().find_map(|s| s.course_mut(id))
    }

    /// Remove a course wherever it lives
    pub fn remove_course(&mut self, id: &CourseId) -> Option<Course> {
        self.semesters.iter_mut().find_map(|s| s.remove_course(id))
    }

    /// Drop every semester
    pub fn clear(&mut self) {
        self.semesters.clear();
    }
}

fn decode_semester(index: usize, item: Value) -> Result<Semester, DocumentError> {
    let position = index + 1;
    let Value::Object(mut fields) = item else {
        return Err(DocumentError::Malformed(format!(
            "semester #{position} is {}, expected an object",
            kind_of(&item)
        )));
    };

    let name = match fields.remove("name") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(name)) => name,
        Some(other) => {
            return Err(DocumentError::Malformed(format!(
                "semester #{position} name is {}, expected a string",
                kind_of(&other)
            )))
        }
    };

    let courses = match fields.remove("courses") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(course_index, item)| decode_course(position, course_index + 1, item))
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(DocumentError::Malformed(format!(
                "semester #{position} courses is {}, expected a list",
                kind_of(&other)
            )))
        }
    };

    Ok(Semester { name, courses })
}

fn decode_course(semester: usize, position: usize, item: Value) -> Result<Course, DocumentError> {
    if !item.is_object() {
        return Err(DocumentError::Malformed(format!(
            "semester #{semester} course #{position} is {}, expected an object",
            kind_of(&item)
        )));
    }
    serde_json::from_value(item).map_err(|e| {
        DocumentError::Malformed(format!("semester #{semester} course #{position}: {e}"))
    })
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
