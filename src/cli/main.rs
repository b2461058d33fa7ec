//! Command-line interface entry point for `gpajotter`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_jotter::config::Config;
use gpa_jotter::info;
use gpa_jotter::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults)
        }
        Command::Show { ids } => commands::show::run(&config, ids),
        Command::Semester { action } => commands::semester::run(action, &config),
        Command::Course { action } => commands::course::run(action, &config),
        Command::Reset { yes } => commands::document::reset(&config, yes),
        Command::Save { file } => commands::document::save(&config, &file),
        Command::Load { file } => commands::document::load(&config, &file),
        Command::Export { format, output } => {
            commands::export::run(&format, output.as_deref(), &config)
        }
        Command::Ingest {
            file,
            semester,
            default_credits,
            dry_run,
        } => commands::ingest::run(&file, &semester, default_credits, dry_run, &config),
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
