//! Markdown report generator
//!
//! One table per semester followed by its GPA, with the CGPA up front.
//! Renders well in GitHub, GitLab and VS Code previews.

use crate::core::gpa::{format_gpa, NaPolicy, SemesterSummary};
use crate::core::models::{Course, Semester};
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{cgpa}}", &ctx.cgpa_display());
        output = output.replace("{{semester_count}}", &ctx.semester_count().to_string());
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{counted_credits}}", &ctx.counted_credits().to_string());
        output = output.replace("{{na_policy}}", policy_note(ctx.policy));

        let mut sections = String::new();
        for (semester, summary) in ctx.transcript.semesters.iter().zip(&ctx.summaries) {
            sections.push_str(&Self::semester_section(semester, summary));
        }
        if sections.is_empty() {
            sections.push_str("_No semesters recorded._\n");
        }
        output.replace("{{semester_sections}}", &sections)
    }

    /// One semester heading and its course table
    fn semester_section(semester: &Semester, summary: &SemesterSummary) -> String {
        let mut section = String::new();
        let _ = writeln!(
            section,
            "## {} (GPA {})\n",
            escape(&semester.name),
            format_gpa(summary.gpa)
        );

        if semester.courses.is_empty() {
            section.push_str("_No courses._\n\n");
            return section;
        }

        section.push_str("| Course | Grade | Credits |\n");
        section.push_str("|---|---|---|\n");
        for course in &semester.courses {
            let _ = writeln!(
                section,
                "| {} | {} | {} |",
                course_label(course),
                escape(course.grade_label()),
                course.credits.map_or_else(|| "-".to_string(), |c| c.to_string())
            );
        }
        section.push('\n');
        section
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

fn course_label(course: &Course) -> String {
    if course.name.trim().is_empty() {
        "_(unnamed)_".to_string()
    } else {
        escape(&course.name)
    }
}

/// Keep user text from breaking table cells
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

const fn policy_note(policy: NaPolicy) -> &'static str {
    match policy {
        NaPolicy::CountCredits => "credits counted, no grade points",
        NaPolicy::Exclude => "excluded",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gpa::GpaCalculator;
    use crate::core::models::Transcript;
    use crate::core::report::fixture;

    #[test]
    fn test_report_contains_semesters_and_cgpa() {
        let transcript = fixture();
        let ctx = ReportContext::new(&transcript, GpaCalculator::default());
        let output = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(output.contains("| **7.11** | 2 | 3 | 9 |"));
        assert!(output.contains("## Semester 1 (GPA 9.14)"));
        assert!(output.contains("| Physics | A | 3 |"));
        assert!(output.contains("| Lab <1> | N/A | 2 |"));
        assert!(!output.contains("{{"));
    }

    #[test]
    fn test_pipes_are_escaped() {
        let mut transcript = fixture();
        transcript.semesters[0].courses[0].name = "A | B".to_string();
        let ctx = ReportContext::new(&transcript, GpaCalculator::default());
        let output = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(output.contains("| A \\| B | O | 4 |"));
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::new();
        let ctx = ReportContext::new(&transcript, GpaCalculator::default());
        let output = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(output.contains("_No semesters recorded._"));
        assert!(output.contains("| **0.00** | 0 | 0 | 0 |"));
    }
}
