//! Semester command handler

use super::{confirm, CommandResult, Workspace};
use crate::args::SemesterAction;
use gpa_jotter::config::Config;
use gpa_jotter::info;

/// Dispatch semester subcommands
pub fn run(action: SemesterAction, config: &Config) -> CommandResult {
    let mut workspace = Workspace::open(config)?;

    match action {
        SemesterAction::Add { name } => {
            let position = workspace.session.add_semester(name.as_deref());
            workspace.save()?;
            let name = &workspace.session.transcript().semesters[position - 1].name;
            println!("✓ Added semester #{position}: {name}");
        }
        SemesterAction::Remove { semester, yes } => {
            let semesters = &workspace.session.transcript().semesters;
            let Some(existing) = semester.checked_sub(1).and_then(|i| semesters.get(i)) else {
                return Err(format!("✗ No semester #{semester}"));
            };
            let prompt = format!(
                "Remove '{}' and its {} courses?",
                existing.name,
                existing.course_count()
            );
            if !yes && !confirm(&prompt) {
                println!("✗ Remove cancelled");
                return Ok(());
            }

            let removed = workspace
                .session
                .remove_semester(semester)
                .map_err(|e| format!("✗ {e}"))?;
            workspace.save()?;
            info!("Removed semester '{}'", removed.name);
            println!("✓ Removed semester #{semester}: {}", removed.name);
        }
        SemesterAction::Rename { semester, name } => {
            workspace
                .session
                .rename_semester(semester, &name)
                .map_err(|e| format!("✗ {e}"))?;
            workspace.save()?;
            let stored = &workspace.session.transcript().semesters[semester - 1].name;
            println!("✓ Renamed semester #{semester} to {stored}");
        }
    }
    Ok(())
}
