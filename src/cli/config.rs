//! Configuration CLI command handlers

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::Config;
use crate::error::{PatchNotesError, Result};

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(key, value),
        ConfigCommand::Get { key } => handle_get(key),
        ConfigCommand::Reset { key } => handle_reset(key),
    }
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: String) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        ConfigKey::Model => {
            config.model = value.clone();
            config.save()?;
            println!("Model set to: {}", value);
        }
        ConfigKey::MaxInputChars => {
            let limit: usize = value.parse().map_err(|_| {
                PatchNotesError::InvalidInput(format!(
                    "Invalid length limit '{}'. Expected a positive integer.",
                    value
                ))
            })?;
            config.max_input_chars = limit;
            config.save()?;
            println!("Maximum input length set to: {} characters", limit);
        }
        ConfigKey::Timezone => {
            config.timezone = value.clone();
            config.save()?;
            println!("Timezone set to: {}", value);
        }
    }
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey) -> Result<()> {
    let config = Config::load()?;

    match key {
        ConfigKey::Model => println!("Model: {}", config.model),
        ConfigKey::MaxInputChars => {
            println!("Maximum input length: {} characters", config.max_input_chars)
        }
        ConfigKey::Timezone => println!("Timezone: {}", config.timezone),
    }
    Ok(())
}

/// Handle resetting a configuration value to its default
fn handle_reset(key: ConfigKey) -> Result<()> {
    let mut config = Config::load()?;
    let defaults = Config::default();

    match key {
        ConfigKey::Model => {
            config.model = defaults.model;
            config.save()?;
            println!("Model reset to default: {}", config.model);
        }
        ConfigKey::MaxInputChars => {
            config.max_input_chars = defaults.max_input_chars;
            config.save()?;
            println!(
                "Maximum input length reset to default: {} characters",
                config.max_input_chars
            );
        }
        ConfigKey::Timezone => {
            config.timezone = defaults.timezone;
            config.save()?;
            println!("Timezone reset to default: {}", config.timezone);
        }
    }
    Ok(())
}
