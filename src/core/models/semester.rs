//! Semester model

use super::course::Course;
use crate::core::ids::CourseId;
use serde::{Deserialize, Serialize};

/// A named group of courses; course order is display order only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester name (e.g. "Semester 3", "Fall 2024")
    #[serde(default)]
    pub name: String,

    /// Courses in display order
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses: Vec::new(),
        }
    }

    /// Name used for the semester at 0-based `index` when none was given
    #[must_use]
    pub fn default_name(index: usize) -> String {
        format!("Semester {}", index + 1)
    }

    /// Append a course
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Remove a course by identifier
    ///
    /// # Returns
    /// The removed course, or `None` if it isn't in this semester
    pub fn remove_course(&mut self, id: &CourseId) -> Option<Course> {
        let pos = self.courses.iter().position(|c| c.has_id(id))?;
        Some(self.courses.remove(pos))
    }

    /// Look up a course by identifier
    #[must_use]
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.has_id(id))
    }

    /// Look up a course by identifier for editing
    pub fn course_mut(&mut self, id: &CourseId) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.has_id(id))
    }

    /// Number of courses in the semester
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    #[test]
    fn test_semester_creation() {
        let semester = Semester::new("Fall 2024");
        assert_eq!(semester.name, "Fall 2024");
        assert_eq!(semester.course_count(), 0);
    }

    #[test]
    fn test_default_name_is_one_based() {
        assert_eq!(Semester::default_name(0), "Semester 1");
        assert_eq!(Semester::default_name(4), "Semester 5");
    }

    #[test]
    fn test_add_and_remove_course() {
        let mut semester = Semester::new("S1");
        semester.add_course(Course::new(CourseId::new("a"), "OS", Grade::A, 4));
        semester.add_course(Course::new(CourseId::new("b"), "DB", Grade::B, 3));

        let removed = semester.remove_course(&CourseId::new("a")).expect("present");
        assert_eq!(removed.name, "OS");
        assert_eq!(semester.course_count(), 1);

        // Removing again finds nothing
        assert!(semester.remove_course(&CourseId::new("a")).is_none());
    }

    #[test]
    fn test_course_lookup_for_edit() {
        let mut semester = Semester::new("S1");
        semester.add_course(Course::new(CourseId::new("a"), "OS", Grade::A, 4));

        if let Some(course) = semester.course_mut(&CourseId::new("a")) {
            course.credits = Some(2);
        }
        assert_eq!(
            semester.course(&CourseId::new("a")).map(Course::credit_hours),
            Some(2)
        );
    }
}
