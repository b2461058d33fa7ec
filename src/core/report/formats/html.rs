//! HTML report generator
//!
//! Produces a single self-contained page (inline CSS, no scripts) from an
//! `askama` template. User text is escaped by the template engine.

use crate::core::gpa::{format_gpa, NaPolicy};
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "report.html")]
struct ReportPage<'a> {
    cgpa: String,
    semester_count: usize,
    course_count: usize,
    counted_credits: u64,
    na_note: &'static str,
    semesters: Vec<SemesterView<'a>>,
}

struct SemesterView<'a> {
    name: &'a str,
    gpa: String,
    courses: Vec<CourseRow<'a>>,
}

struct CourseRow<'a> {
    name: &'a str,
    grade: &'a str,
    credits: String,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn page<'a>(ctx: &ReportContext<'a>) -> ReportPage<'a> {
        let semesters = ctx
            .transcript
            .semesters
            .iter()
            .zip(&ctx.summaries)
            .map(|(semester, summary)| SemesterView {
                name: &semester.name,
                gpa: format_gpa(summary.gpa),
                courses: semester
                    .courses
                    .iter()
                    .map(|course| CourseRow {
                        name: &course.name,
                        grade: course.grade_label(),
                        credits: course.credits.map_or_else(|| "-".to_string(), |c| c.to_string()),
                    })
                    .collect(),
            })
            .collect();

        ReportPage {
            cgpa: ctx.cgpa_display(),
            semester_count: ctx.semester_count(),
            course_count: ctx.course_count(),
            counted_credits: ctx.counted_credits(),
            na_note: match ctx.policy {
                NaPolicy::CountCredits => "credits counted, no grade points",
                NaPolicy::Exclude => "excluded",
            },
            semesters,
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::page(ctx).render()?)
    }
}
