//! Configuration module for the jotter CLI

use crate::core::gpa::NaPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the application directory in path-like values
const DIR_VARIABLE: &str = "$GPA_JOTTER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Grading configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingConfig {
    /// How `N/A` courses count: `count-credits` or `exclude`
    #[serde(default)]
    pub na_policy: String,
    /// Upper bound accepted when editing a course's credits (0 falls back to the default)
    #[serde(default)]
    pub max_credits: u32,
    /// Seed every new semester with one default course
    #[serde(default)]
    pub seed_semester_course: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Working document the CLI reads and writes between invocations
    #[serde(default)]
    pub data_file: String,
    /// Directory for CSV and report exports
    #[serde(default)]
    pub exports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Grading settings
    #[serde(default)]
    pub grading: GradingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override the `N/A` grading policy
    pub na_policy: Option<String>,
    /// Override the working document path
    pub data_file: Option<String>,
    /// Override the exports directory
    pub exports_dir: Option<String>,
}

impl Config {
    /// Get the `$GPA_JOTTER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gpajotter`
    /// - macOS: `~/Library/Application Support/gpajotter`
    /// - Windows: `%APPDATA%\gpajotter`
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpajotter")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults`, and a
    /// zero `max_credits`, are filled. Booleans are left as the user wrote them.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        let mut fill = |target: &mut String, source: &str| {
            if target.is_empty() && !source.is_empty() {
                source.clone_into(target);
                changed = true;
            }
        };

        fill(&mut self.logging.level, &defaults.logging.level);
        fill(&mut self.logging.file, &defaults.logging.file);
        fill(&mut self.grading.na_policy, &defaults.grading.na_policy);
        fill(&mut self.paths.data_file, &defaults.paths.data_file);
        fill(&mut self.paths.exports_dir, &defaults.paths.exports_dir);

        if self.grading.max_credits == 0 && defaults.grading.max_credits != 0 {
            self.grading.max_credits = defaults.grading.max_credits;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect this run; nothing is written back to the config file.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(policy) = &overrides.na_policy {
            self.grading.na_policy.clone_from(policy);
        }
        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file = Self::expand_variables(data_file);
        }
        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir = Self::expand_variables(exports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_app_dir`](Self::get_app_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GPA_JOTTER` in a string to the application directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let app_dir = Self::get_app_dir();
            value.replace(DIR_VARIABLE, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$GPA_JOTTER` is expanded in
    /// path-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);

        Ok(config)
    }

    /// Load configuration from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults on first run
    ///
    /// Missing fields are merged in from the defaults and written back so that
    /// upgrades pick up new settings. Falls back to defaults on any read error.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created, the config
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Effective `N/A` policy; unknown values fall back to the default policy
    #[must_use]
    pub fn na_policy(&self) -> NaPolicy {
        self.grading.na_policy.parse().unwrap_or_default()
    }

    /// Configured credit bound for edits, `None` when unset
    #[must_use]
    pub const fn max_credits(&self) -> Option<u32> {
        if self.grading.max_credits == 0 {
            None
        } else {
            Some(self.grading.max_credits)
        }
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `na_policy`, `max_credits`,
    /// `seed_semester_course`, `data_file`, `exports_dir` (dashes are accepted
    /// in place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "na_policy" | "na-policy" => Some(self.grading.na_policy.clone()),
            "max_credits" | "max-credits" => Some(self.grading.max_credits.to_string()),
            "seed_semester_course" | "seed-semester-course" => {
                Some(self.grading.seed_semester_course.to_string())
            }
            "data_file" | "data-file" => Some(self.paths.data_file.clone()),
            "exports_dir" | "exports-dir" => Some(self.paths.exports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value
                    .parse::<crate::logger::Level>()
                    .map_err(|e| format!("Invalid value for 'level': {e}"))?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = Self::expand_variables(value),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "na_policy" | "na-policy" => {
                let policy = value.parse::<NaPolicy>()?;
                self.grading.na_policy = policy.to_string();
            }
            "max_credits" | "max-credits" => {
                self.grading.max_credits = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid number for 'max_credits': '{value}'"))?;
            }
            "seed_semester_course" | "seed-semester-course" => {
                self.grading.seed_semester_course = value.parse::<bool>().map_err(|_| {
                    format!("Invalid boolean value for 'seed_semester_course': '{value}'")
                })?;
            }
            "data_file" | "data-file" => self.paths.data_file = Self::expand_variables(value),
            "exports_dir" | "exports-dir" => {
                self.paths.exports_dir = Self::expand_variables(value);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "na_policy" | "na-policy" => self
                .grading
                .na_policy
                .clone_from(&defaults.grading.na_policy),
            "max_credits" | "max-credits" => {
                self.grading.max_credits = defaults.grading.max_credits;
            }
            "seed_semester_course" | "seed-semester-course" => {
                self.grading.seed_semester_course = defaults.grading.seed_semester_course;
            }
            "data_file" | "data-file" => self.paths.data_file.clone_from(&defaults.paths.data_file),
            "exports_dir" | "exports-dir" => self
                .paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it from defaults. Succeeds
    /// when there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[grading]")?;
        writeln!(f, "  na_policy = \"{}\"", self.grading.na_policy)?;
        writeln!(f, "  max_credits = {}", self.grading.max_credits)?;
        writeln!(
            f,
            "  seed_semester_course = {}",
            self.grading.seed_semester_course
        )?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_with_grading_section() {
        let config = Config::from_defaults();
        assert_eq!(config.na_policy(), NaPolicy::CountCredits);
        assert_eq!(config.max_credits(), Some(10));
        assert!(config.grading.seed_semester_course);
    }

    #[test]
    fn test_unknown_na_policy_falls_back() {
        let mut config = Config::from_defaults();
        config.grading.na_policy = "whatever".to_string();
        assert_eq!(config.na_policy(), NaPolicy::default());
    }

    #[test]
    fn test_set_na_policy_validates() {
        let mut config = Config::from_defaults();
        config.set("na_policy", "exclude").expect("valid policy");
        assert_eq!(config.na_policy(), NaPolicy::Exclude);
        assert!(config.set("na_policy", "sometimes").is_err());
    }

    #[test]
    fn test_set_level_validates() {
        let mut config = Config::from_defaults();
        assert!(config.set("level", "loud").is_err());
        config.set("level", "INFO").expect("valid level");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_zero_max_credits_is_unset() {
        let mut config = Config::from_defaults();
        config.set("max_credits", "0").expect("valid number");
        assert_eq!(config.max_credits(), None);
    }
}
