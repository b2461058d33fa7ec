//! Course command handler

use super::{CommandResult, Workspace};
use crate::args::CourseAction;
use gpa_jotter::config::Config;
use gpa_jotter::core::gpa::format_gpa;
use gpa_jotter::core::ids::CourseId;
use gpa_jotter::core::session::NewCourse;

/// Dispatch course subcommands
pub fn run(action: CourseAction, config: &Config) -> CommandResult {
    let mut workspace = Workspace::open(config)?;

    match action {
        CourseAction::Add {
            semester,
            name,
            grade,
            credits,
        } => {
            let id = workspace
                .session
                .add_course(
                    semester,
                    NewCourse {
                        name,
                        grade,
                        credits,
                    },
                )
                .map_err(|e| format!("✗ {e}"))?;
            workspace.save()?;
            println!("✓ Added course {id} to semester #{semester}");
            print_semester_gpa(&workspace, semester);
        }
        CourseAction::Remove { id } => {
            let removed = workspace
                .session
                .remove_course(&CourseId::new(id))
                .map_err(|e| format!("✗ {e}"))?;
            workspace.save()?;
            let label = if removed.name.is_empty() {
                "(unnamed)"
            } else {
                removed.name.as_str()
            };
            println!("✓ Removed course {label}");
        }
        CourseAction::Edit {
            id,
            name,
            grade,
            credits,
        } => {
            if name.is_none() && grade.is_none() && credits.is_none() {
                return Err("✗ Nothing to change: pass --name, --grade or --credits".to_string());
            }

            let id = CourseId::new(id);
            let session = &mut workspace.session;
            if let Some(credits) = credits {
                session
                    .set_course_credits(&id, credits)
                    .map_err(|e| format!("✗ {e}"))?;
            }
            if let Some(name) = name {
                session
                    .set_course_name(&id, &name)
                    .map_err(|e| format!("✗ {e}"))?;
            }
            if let Some(grade) = grade {
                session
                    .set_course_grade(&id, grade)
                    .map_err(|e| format!("✗ {e}"))?;
            }
            workspace.save()?;
            println!("✓ Updated course {id}");
            if let Some((index, _)) = workspace.session.transcript().find_course(&id) {
                print_semester_gpa(&workspace, index + 1);
            }
        }
    }
    Ok(())
}

fn print_semester_gpa(workspace: &Workspace, semester: usize) {
    if let Ok(gpa) = workspace.session.semester_gpa(semester) {
        println!(
            "  Semester GPA: {}  CGPA: {}",
            format_gpa(gpa),
            format_gpa(workspace.session.cumulative_gpa())
        );
    }
}
