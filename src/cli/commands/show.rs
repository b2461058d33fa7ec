//! Show command handler

use super::{CommandResult, Workspace};
use gpa_jotter::config::Config;
use gpa_jotter::core::gpa::format_gpa;
use gpa_jotter::core::models::Course;

/// Print every semester with its GPA, followed by the CGPA
pub fn run(config: &Config, show_ids: bool) -> CommandResult {
    let workspace = Workspace::open(config)?;
    let session = &workspace.session;
    let transcript = session.transcript();

    println!("\n=== GPA Jotter ===\n");

    if transcript.is_empty() {
        println!("No semesters yet. Add one with `gpajotter semester add`.");
    }

    for (position, (semester, summary)) in transcript
        .semesters
        .iter()
        .zip(session.summaries())
        .enumerate()
    {
        println!(
            "[{}] {} - GPA: {}",
            position + 1,
            semester.name,
            format_gpa(summary.gpa)
        );
        if semester.courses.is_empty() {
            println!("      (no courses)");
        }
        for course in &semester.courses {
            println!("      {}", course_line(course, show_ids));
        }
        println!();
    }

    println!(
        "Cumulative GPA (CGPA): {}",
        format_gpa(session.cumulative_gpa())
    );
    Ok(())
}

fn course_line(course: &Course, show_ids: bool) -> String {
    let name = if course.name.is_empty() {
        "(unnamed)"
    } else {
        course.name.as_str()
    };
    let credits = course
        .credits
        .map_or_else(|| "-".to_string(), |c| c.to_string());
    let line = format!("{name:<32} {:<4} {credits:>2} cr", course.grade_label());

    match (&course.id, show_ids) {
        (Some(id), true) => format!("{id:<20} {line}"),
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpa_jotter::core::ids::CourseId;
    use gpa_jotter::core::models::Grade;

    #[test]
    fn test_course_line_layout() {
        let course = Course::new(CourseId::new("c-1"), "Maths", Grade::APlus, 4);
        let line = course_line(&course, false);
        assert!(line.starts_with("Maths "));
        assert!(line.ends_with(" 4 cr"));
        assert!(course_line(&course, true).starts_with("c-1 "));
    }

    #[test]
    fn test_unnamed_course() {
        let course = Course::with_defaults(CourseId::new("c-2"));
        assert!(course_line(&course, false).starts_with("(unnamed)"));
    }
}
