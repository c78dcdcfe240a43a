//! patchnotes - AI-assisted patch notes generator
//!
//! Run without arguments to generate patch notes interactively, or use
//! subcommands for batch evaluation and configuration.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use patchnotes::cli::commands::{Cli, Commands};
use patchnotes::cli::{config, eval, generate};
use patchnotes::error::Result;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // No subcommand - interactive generation
        None => generate::handle_generate().await,

        Some(Commands::Eval(args)) => eval::handle_eval(args).await,
        Some(Commands::Config(args)) => config::handle_config(args.command),
    }
}
