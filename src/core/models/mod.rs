//! Data models for the jotter: grades, courses, semesters and the transcript

pub mod course;
pub mod grade;
pub mod semester;
pub mod transcript;

pub use course::Course;
pub use grade::{Grade, GradeMark};
pub use semester::Semester;
pub use transcript::Transcript;
