//! Flat CSV export, one row per course

use crate::core::gpa::format_gpa;
use crate::core::models::GradeMark;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;

/// Column headers, in order
pub const HEADERS: [&str; 5] = ["Semester", "Semester GPA", "Course Name", "Grade", "Credits"];

/// CSV exporter
///
/// Semesters without courses produce no rows.
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut writer = ::csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADERS)?;

        for (semester, summary) in ctx.transcript.semesters.iter().zip(&ctx.summaries) {
            let gpa = format_gpa(summary.gpa);
            for course in &semester.courses {
                let credits = course.credits.map(|c| c.to_string()).unwrap_or_default();
                writer.write_record([
                    semester.name.as_str(),
                    gpa.as_str(),
                    course.name.as_str(),
                    course.grade.as_ref().map_or("", GradeMark::as_str),
                    credits.as_str(),
                ])?;
            }
        }

        let bytes = writer.into_inner().map_err(|e| e.to_string())?;
        Ok(String::from_utf8(bytes)?)
    }
}
