//! Save, load and reset handlers for the working document

use super::{confirm, CommandResult, Workspace};
use gpa_jotter::config::Config;
use gpa_jotter::core::storage;
use gpa_jotter::{error, info};
use std::path::Path;

/// Copy the working document to `file`
pub fn save(config: &Config, file: &Path) -> CommandResult {
    let workspace = Workspace::open(config)?;
    storage::save(file, workspace.session.transcript()).map_err(|e| {
        error!("Save to {} failed: {e}", file.display());
        format!("✗ {e}")
    })?;
    println!(
        "✓ Saved {} semesters to {}",
        workspace.session.transcript().semester_count(),
        file.display()
    );
    Ok(())
}

/// Replace the working document with the contents of `file`
///
/// The working document is only rewritten once `file` has decoded cleanly.
pub fn load(config: &Config, file: &Path) -> CommandResult {
    let (transcript, report) = storage::load(file).map_err(|e| {
        error!("Load from {} rejected: {e}", file.display());
        if e.is_invalid_content() {
            format!("✗ {} is not a GPA Jotter file: {e}", file.display())
        } else {
            format!("✗ {e}")
        }
    })?;

    let mut workspace = Workspace::open_or_empty(config);
    workspace.session.replace(transcript);
    workspace.save()?;

    let transcript = workspace.session.transcript();
    println!(
        "✓ Loaded {} semesters, {} courses from {}",
        transcript.semester_count(),
        transcript.course_count(),
        file.display()
    );
    if report.ids_assigned > 0 || report.duplicate_ids_replaced > 0 {
        println!(
            "  Assigned ids to {} courses",
            report.ids_assigned + report.duplicate_ids_replaced
        );
    }
    Ok(())
}

/// Clear the working document
pub fn reset(config: &Config, yes: bool) -> CommandResult {
    let mut workspace = Workspace::open_or_empty(config);
    if workspace.session.transcript().is_empty() && !workspace.path.exists() {
        println!("✓ Nothing to reset");
        return Ok(());
    }

    if !yes && !confirm("Are you sure you want to delete every semester?") {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    workspace.session.reset();
    workspace.save()?;
    info!("Working document reset");
    println!("✓ All data cleared");
    Ok(())
}
