//! Transcript exports
//!
//! Renders the open transcript as a flat CSV table, a Markdown report or a
//! self-contained HTML page. All three are write-only views; only the JSON
//! document is ever read back.

pub mod formats;

use crate::core::gpa::{format_gpa, GpaCalculator, NaPolicy, SemesterSummary};
use crate::core::models::Transcript;
use std::error::Error;
use std::path::Path;

pub use formats::{CsvReporter, HtmlReporter, MarkdownReporter, ReportFormat};

/// Everything a report needs, computed once
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Transcript being reported
    pub transcript: &'a Transcript,
    /// Per-semester GPA figures, parallel to `transcript.semesters`
    pub summaries: Vec<SemesterSummary>,
    /// Cumulative GPA
    pub cgpa: f64,
    /// Policy used for `N/A` courses
    pub policy: NaPolicy,
}

impl<'a> ReportContext<'a> {
    /// Compute report figures for `transcript`
    #[must_use]
    pub fn new(transcript: &'a Transcript, calculator: GpaCalculator) -> Self {
        Self {
            transcript,
            summaries: calculator.summaries(transcript),
            cgpa: calculator.cumulative_gpa(transcript),
            policy: calculator.policy(),
        }
    }

    /// CGPA formatted for display
    #[must_use]
    pub fn cgpa_display(&self) -> String {
        format_gpa(self.cgpa)
    }

    /// Credits that entered the CGPA
    #[must_use]
    pub fn counted_credits(&self) -> u64 {
        self.summaries.iter().map(|s| s.counted_credits).sum()
    }

    /// Total number of courses
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.transcript.course_count()
    }

    /// Number of semesters
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.transcript.semester_count()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Render `format` for `ctx` into a file inside `dir`, named `stem.<ext>`
///
/// # Errors
/// Returns an error if the directory can't be created or rendering fails
pub fn export_to_dir(
    ctx: &ReportContext,
    format: ReportFormat,
    dir: &Path,
    stem: &str,
) -> Result<std::path::PathBuf, Box<dyn Error>> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{stem}.{}", format.extension()));
    format.generator().generate(ctx, &path)?;
    Ok(path)
}

#[cfg(test)]
pub(crate) fn fixture() -> Transcript {
    use crate::core::ids::CourseId;
    use crate::core::models::{Course, Grade, Semester};

    let mut first = Semester::new("Semester 1");
    first.add_course(Course::new(CourseId::new("a"), "Maths", Grade::O, 4));
    first.add_course(Course::new(CourseId::new("b"), "Physics", Grade::A, 3));
    let mut second = Semester::new("Semester 2");
    second.add_course(Course::new(CourseId::new("c"), "Lab <1>", Grade::NotApplicable, 2));
    Transcript::from_semesters(vec![first, second])
}
