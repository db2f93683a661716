//! CLI argument definitions for `cgpa-analytics`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cgpa_analytics::config::ConfigOverrides;
use logger::Level;

/// Log level as accepted on the command line. Stored lowercase in the config
/// file; converted to `logger::Level` for runtime use.
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

impl LogLevelArg {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
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
        f.write_str(self.as_str())
    }
}

/// Subcommands of `cgpanalytics config`.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show one configuration value, or all of them when KEY is omitted.
    Get {
        /// Configuration key to show (e.g., `level`, `out_dir`, `total_terms`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value and save it.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Restore one configuration value to its default.
    Unset {
        /// Configuration key to restore
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset all configuration to defaults (asks for confirmation).
    Reset,
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
    /// Analyze pasted portal result data.
    ///
    /// Parses one or more tab-separated transcript files and reports the
    /// CGPA, total credits, and a per-term SGPA breakdown.
    Analyze {
        /// Paths to transcript text files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1..)]
        input_files: Vec<PathBuf>,

        /// Summary output file paths (optional; defaults to config `out_dir`)
        ///
        /// When provided, must match the number of input files 1:1.
        #[arg(short, long, value_name = "FILES", num_args = 1..)]
        output: Vec<PathBuf>,

        /// Simulate a grade before aggregating, e.g. `--what-if CSE101=A+`
        /// (repeatable; matches the first course with that code)
        #[arg(long = "what-if", value_name = "CODE=GRADE")]
        what_if: Vec<String>,

        /// Write a Markdown summary file in addition to console output
        #[arg(long)]
        export: bool,
    },
    /// Solve for the GPA required to reach a target CGPA.
    ///
    /// Current standing comes either from a transcript file or from the
    /// --cgpa/--credits/--completed-terms flags (flags win when both given).
    Target {
        /// Optional transcript file to derive current standing from
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// The target CGPA to reach by the end of the program
        #[arg(short, long, value_name = "CGPA")]
        goal: f32,

        /// Current CGPA (required unless FILE is given)
        #[arg(long, value_name = "CGPA")]
        cgpa: Option<f32>,

        /// Credits completed so far (required unless FILE is given)
        #[arg(long, value_name = "CREDITS")]
        credits: Option<f32>,

        /// Terms completed so far (required unless FILE is given)
        #[arg(long = "completed-terms", value_name = "TERMS")]
        completed_terms: Option<usize>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "cgpanalytics",
    about = "CGPA analysis command-line interface",
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

    /// Override config output directory
    #[arg(long = "config-out-dir", value_name = "DIR")]
    pub config_out_dir: Option<PathBuf>,

    /// Override config output directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override config planned program length in terms
    #[arg(long = "config-total-terms", value_name = "TERMS")]
    pub config_total_terms: Option<usize>,

    /// Override config planned program length in terms (short form)
    #[arg(long = "total-terms", value_name = "TERMS")]
    pub total_terms: Option<usize>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides.
    ///
    /// Short-form flags (e.g., `--total-terms`) take precedence over long-form
    /// flags (e.g., `--config-total-terms`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_out_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            total_terms: self.total_terms.or(self.config_total_terms),
        }
    }
}
