//! Configuration module for `cgpa-analytics`

use crate::core::target::DEFAULT_TOTAL_TERMS;
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

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for exported summary files
    #[serde(default)]
    pub out_dir: String,
}

/// Academic-program configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicConfig {
    /// Planned program length in terms, used by the target-GPA solver
    #[serde(default = "default_total_terms")]
    pub total_terms: usize,
}

const fn default_total_terms() -> usize {
    DEFAULT_TOTAL_TERMS
}

impl Default for AcademicConfig {
    fn default() -> Self {
        Self {
            total_terms: DEFAULT_TOTAL_TERMS,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Academic-program settings
    #[serde(default)]
    pub academic: AcademicConfig,
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
    /// Override summary output directory
    pub out_dir: Option<String>,
    /// Override planned program length in terms
    pub total_terms: Option<usize>,
}

impl Config {
    /// Get the `$CGPA_ANALYTICS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/cgpanalytics`
    /// - macOS: `~/Library/Application Support/cgpanalytics`
    /// - Windows: `%APPDATA%\cgpanalytics`
    #[must_use]
    pub fn get_cgpanalytics_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cgpanalytics")
    }

    /// Merge missing fields from defaults into this config.
    ///
    /// Ensures newly added configuration fields get populated when loading an
    /// older config file. Only empty fields with a non-empty default change.
    ///
    /// Returns `true` if any fields were added/changed.
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.out_dir.is_empty() && !defaults.paths.out_dir.is_empty() {
            self.paths.out_dir.clone_from(&defaults.paths.out_dir);
            changed = true;
        }

        if self.academic.total_terms == 0 && defaults.academic.total_terms != 0 {
            self.academic.total_terms = defaults.academic.total_terms;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration.
    ///
    /// Command-line arguments override configuration file values for this run
    /// only; the persistent file is not touched. Only non-`None` values in the
    /// overrides struct replace config values.
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

        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
        if let Some(total_terms) = overrides.total_terms {
            self.academic.total_terms = total_terms;
        }
    }

    /// Get the user config file path (`config.toml`, or `dconfig.toml` in
    /// debug builds so a debug config can live alongside the real one).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_cgpanalytics_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CGPA_ANALYTICS` in a string to the actual config directory.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$CGPA_ANALYTICS") {
            let dir = Self::get_cgpanalytics_dir();
            value.replace("$CGPA_ANALYTICS", dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string, expanding `$CGPA_ANALYTICS` in
    /// path-valued fields. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// cannot happen in practice since the defaults are compiled in.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found.
    ///
    /// - Existing file: load it, merge in fields missing relative to the
    ///   defaults, and save the updated config.
    /// - First run: create the config directory and write the defaults.
    ///
    /// Falls back to defaults if anything fails while loading.
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

    /// Save configuration to the platform config file, creating the config
    /// directory when needed.
    ///
    /// # Errors
    /// Returns an error if serialization fails, the directory cannot be
    /// created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key.
    ///
    /// Supported keys: `level`, `file`, `verbose`, `out_dir`, `total_terms`.
    /// Returns `None` for unknown keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "out_dir" | "out-dir" => Some(self.paths.out_dir.clone()),
            "total_terms" | "total-terms" => Some(self.academic.total_terms.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key.
    ///
    /// Updates the in-memory config only; call [`save()`](Self::save) to
    /// persist.
    ///
    /// # Errors
    /// Returns an error for unknown keys or values that fail to parse (e.g. a
    /// non-boolean `verbose`, a non-numeric `total_terms`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "out_dir" | "out-dir" => self.paths.out_dir = value.to_string(),
            "total_terms" | "total-terms" => {
                self.academic.total_terms = value
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid number for 'total_terms': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default.
    ///
    /// Updates the in-memory config only; call [`save()`](Self::save) to
    /// persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "out_dir" | "out-dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            "total_terms" | "total-terms" => {
                self.academic.total_terms = defaults.academic.total_terms;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file; the
    /// next [`load()`](Self::load) recreates it. Destructive; the CLI asks
    /// for confirmation before calling this.
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

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        writeln!(f, "\n[academic]")?;
        writeln!(f, "  total_terms = {}", self.academic.total_terms)?;

        Ok(())
    }
}
