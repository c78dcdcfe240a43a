//! CLI command definitions using clap
//!
//! Defines the command structure for the `patchnotes` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// patchnotes - AI-assisted patch notes generator
///
/// Run without arguments to generate patch notes interactively from
/// bullet-point changes pasted on stdin.
#[derive(Parser, Debug)]
#[command(name = "patchnotes", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the batch evaluation suite against the configured model
    Eval(EvalArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Batch evaluation arguments
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Path to the JSON test case file
    #[arg(long, default_value = "tests.json")]
    pub tests: PathBuf,
}

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set { key: ConfigKey, value: String },

    /// Show a configuration value
    Get { key: ConfigKey },

    /// Reset a configuration value to its default
    Reset { key: ConfigKey },
}

/// Configuration keys
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ConfigKey {
    /// Ollama model used for generation
    Model,
    /// Maximum flattened input length, in characters
    MaxInputChars,
    /// Timezone for the release metadata fetch
    Timezone,
}
