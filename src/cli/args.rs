//! CLI argument definitions for `gpajotter`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_jotter::config::ConfigOverrides;
use gpa_jotter::core::models::Grade;
use gpa_jotter::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `na_policy`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum SemesterAction {
    /// Append a semester (named `Semester N` when no name is given)
    Add {
        /// Semester name
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
    /// Remove a semester and all of its courses
    Remove {
        /// 1-based semester number as shown by `show`
        #[arg(value_name = "N")]
        semester: usize,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Rename a semester
    Rename {
        /// 1-based semester number
        #[arg(value_name = "N")]
        semester: usize,
        /// New name
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseAction {
    /// Add a course to a semester (defaults: grade O, 3 credits)
    Add {
        /// 1-based semester number
        #[arg(value_name = "N")]
        semester: usize,
        /// Course name
        #[arg(short, long)]
        name: Option<String>,
        /// Grade: O, A+, A, B+, B, C+, C or N/A
        #[arg(short, long)]
        grade: Option<Grade>,
        /// Credit hours
        #[arg(short, long)]
        credits: Option<u32>,
    },
    /// Remove a course by id
    Remove {
        /// Course id as shown by `show --ids`
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Change fields of a course
    Edit {
        /// Course id as shown by `show --ids`
        #[arg(value_name = "ID")]
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New grade
        #[arg(short, long)]
        grade: Option<Grade>,
        /// New credit hours
        #[arg(short, long)]
        credits: Option<u32>,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show every semester with its GPA, and the CGPA.
    Show {
        /// Include course ids (needed for `course edit` and `course remove`)
        #[arg(long)]
        ids: bool,
    },
    /// Add, remove or rename semesters.
    Semester {
        #[command(subcommand)]
        action: SemesterAction,
    },
    /// Add, remove or edit courses.
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },
    /// Clear every semester from the working document (requires confirmation).
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Save the working document to a JSON file.
    Save {
        /// Destination file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Replace the working document with a JSON file.
    ///
    /// Older files without course ids are repaired on load. A file that isn't
    /// a list of semesters is rejected and the working document is kept.
    Load {
        /// JSON file to load
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Export the working document as csv, markdown (md) or html.
    Export {
        /// Export format
        #[arg(value_name = "FORMAT")]
        format: String,
        /// Output file path (optional; defaults to config `exports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Import course lines from text extracted from a grade card.
    Ingest {
        /// Text file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Semester that receives the courses (created if missing)
        #[arg(short, long, default_value = "Imported")]
        semester: String,
        /// Credits for lines without a credits column
        #[arg(long, value_name = "CREDITS")]
        default_credits: Option<u32>,
        /// Show what would be imported without changing the document
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpajotter",
    about = "Track semester GPA and cumulative GPA from the command line",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override how N/A grades count (count-credits|exclude)
    #[arg(long = "na-policy", value_name = "POLICY")]
    pub na_policy: Option<String>,

    /// Override the working document path
    #[arg(long = "data-file", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Override the exports directory
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            na_policy: self.na_policy.clone(),
            data_file: self
                .data_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            exports_dir: self
                .exports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
