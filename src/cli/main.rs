//! Command-line interface entry point for `cgpa-analytics`

mod args;
mod commands;

use args::{Cli, Command};
use cgpa_analytics::config::Config;
use clap::Parser;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    let verbose = init_logging(&args, &config);

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Analyze {
            input_files,
            output,
            what_if,
            export,
        } => {
            commands::analyze::run(&input_files, &output, &what_if, export, &config, verbose);
        }
        Command::Target {
            input_file,
            goal,
            cgpa,
            credits,
            completed_terms,
        } => {
            commands::target::run(
                input_file.as_deref(),
                goal,
                cgpa,
                credits,
                completed_terms,
                &config,
            );
        }
    }
}

/// Bring the logger in line with the CLI flags and loaded config.
///
/// Precedence for the runtime level: `--log-level` flag, then the config
/// file's `logging.level`, then warn. `--debug` forces debug regardless.
/// Returns the effective verbose flag so commands can adjust their output.
fn init_logging(args: &Cli, config: &Config) -> bool {
    match args.log_level {
        Some(flag) => set_level(flag.into()),
        None => {
            if !logger::set_level_from_str(&config.logging.level) {
                set_level(Level::Warn);
            }
        }
    }
    if args.debug_flag || args.log_level == Some(args::LogLevelArg::Debug) {
        set_level(Level::Debug);
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }

    // File sink: the --log-file flag wins over the config file's path.
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| PathBuf::from(&config.logging.file));
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

    verbose
}
