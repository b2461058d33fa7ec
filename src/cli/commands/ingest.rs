//! Ingest command handler

use super::{CommandResult, Workspace};
use gpa_jotter::config::Config;
use gpa_jotter::core::ingest::{ingest_file, IngestOptions, IngestOutcome};
use gpa_jotter::error;
use std::path::Path;

/// Scan `file` for course lines and add them to `semester_name`
pub fn run(
    file: &Path,
    semester_name: &str,
    default_credits: Option<u32>,
    dry_run: bool,
    config: &Config,
) -> CommandResult {
    let mut workspace = Workspace::open(config)?;

    let defaults = IngestOptions::default();
    let options = IngestOptions {
        default_credits: default_credits.unwrap_or(defaults.default_credits),
        max_credits: workspace.session.options().max_credits,
        ..defaults
    };

    let outcome = ingest_file(file, &options).map_err(|e| {
        error!("Failed to read {}: {e}", file.display());
        format!("✗ Failed to read {}: {e}", file.display())
    })?;

    for issue in &outcome.issues {
        eprintln!("✗ Skipped {issue}");
    }
    if outcome.courses.is_empty() {
        println!("{}", nothing_imported(&outcome, file));
        return Ok(());
    }

    if dry_run {
        for course in &outcome.courses {
            println!(
                "  {:<40} {:<4} {} cr",
                course.name,
                course.grade_label(),
                course.credit_hours()
            );
        }
        println!("✓ {} courses would be imported (dry run)", outcome.courses.len());
        return Ok(());
    }

    let count = outcome.courses.len();
    let position = workspace
        .session
        .import_courses(semester_name, outcome.courses);
    workspace.save()?;
    println!("✓ Imported {count} courses into semester #{position} ({semester_name})");
    Ok(())
}

/// Message for a scan that produced no courses
fn nothing_imported(outcome: &IngestOutcome, file: &Path) -> String {
    match outcome.issues.len() {
        0 => format!("No course lines found in {}", file.display()),
        skipped => format!(
            "No courses imported: all {skipped} course lines in {} were skipped",
            file.display()
        ),
    }
}
