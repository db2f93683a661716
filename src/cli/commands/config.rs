//! Config command handler

use crate::args::ConfigSubcommand;
use cgpa_analytics::config::Config;
use std::io::{self, Write};
use std::process;

/// Dispatch a config subcommand. Bare `config` shows everything.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None => {
            show(config, None);
            Ok(None)
        }
        Some(ConfigSubcommand::Get { key }) => {
            show(config, key.as_deref());
            Ok(None)
        }
        Some(ConfigSubcommand::Set { key, value }) => config
            .set(&key, &value)
            .and_then(|()| persist(config))
            .map(|()| Some(format!("✓ Set {key} = {value}"))),
        Some(ConfigSubcommand::Unset { key }) => config
            .unset(&key, defaults)
            .and_then(|()| persist(config))
            .map(|()| Some(format!("✓ Reset {key} to default"))),
        Some(ConfigSubcommand::Reset) => reset_with_confirmation(),
    };

    match outcome {
        Ok(Some(message)) => println!("{message}"),
        Ok(None) => {}
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn persist(config: &Config) -> Result<(), String> {
    config.save().map_err(|e| format!("Failed to save config: {e}"))
}

/// Print one value, or the whole config when no key is given.
fn show(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        },
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
}

/// Destructive reset; prompts on stdin before deleting the config file.
fn reset_with_confirmation() -> Result<Option<String>, String> {
    if !Config::get_config_file_path().exists() {
        return Ok(Some("✓ Config is already at defaults".to_string()));
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let answer = response.trim();

    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        Ok(Some("✓ Config reset to defaults".to_string()))
    } else {
        Ok(Some("✗ Reset cancelled".to_string()))
    }
}
