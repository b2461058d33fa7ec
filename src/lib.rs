//! Library for `gpa-jotter`
//!
//! Record courses per semester, compute semester GPA and CGPA, and keep saved
//! documents consistent across versions. The `gpajotter` binary is a thin
//! command-line front end over this crate.

pub mod core;
pub mod logger;

pub use crate::core::errors::{DocumentError, SessionError};
pub use crate::core::gpa::{cumulative_gpa, grade_point, semester_gpa, GpaCalculator, NaPolicy};
pub use crate::core::models::{Course, Grade, GradeMark, Semester, Transcript};
pub use crate::core::normalizer::normalize;
pub use crate::core::session::Session;
pub use crate::core::{config, get_version};
