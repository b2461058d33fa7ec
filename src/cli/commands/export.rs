//! Export command handler
//!
//! Writes the working document as CSV, Markdown or HTML.

use super::{CommandResult, Workspace};
use gpa_jotter::config::Config;
use gpa_jotter::core::report::{export_to_dir, ReportContext, ReportFormat};
use gpa_jotter::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name used when no output path is given
const DEFAULT_EXPORT_STEM: &str = "gpa_report";

/// Run the export command
pub fn run(format_str: &str, output: Option<&Path>, config: &Config) -> CommandResult {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;
    let workspace = Workspace::open(config)?;
    let ctx = ReportContext::new(
        workspace.session.transcript(),
        workspace.session.calculator(),
    );

    let written = match output {
        Some(path) => write_to(&ctx, format, path),
        None => export_to_dir(
            &ctx,
            format,
            Path::new(&config.paths.exports_dir),
            DEFAULT_EXPORT_STEM,
        ),
    }
    .map_err(|e| {
        error!("Export as {format} failed: {e}");
        format!("✗ Failed to export {format}: {e}")
    })?;

    info!("Exported {format} to {}", written.display());
    println!("✓ Exported {format}: {}", written.display());
    Ok(())
}

fn write_to(
    ctx: &ReportContext,
    format: ReportFormat,
    path: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    format.generator().generate(ctx, path)?;
    Ok(path.to_path_buf())
}
