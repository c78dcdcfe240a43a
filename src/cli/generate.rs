//! Interactive patch note generation
//!
//! The main flow: collect bullets from stdin, run the safety gates, fetch
//! release metadata, build the prompt, invoke the model, log telemetry,
//! and display the result. Each run is independent; nothing persists.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::ai::{prompts, OllamaClient};
use crate::core::config::Config;
use crate::core::metadata::resolve_release_metadata;
use crate::core::safety;
use crate::core::style_guide::{load_style_guide, STYLE_GUIDE_PATH};
use crate::error::{PatchNotesError, Result};
use crate::telemetry::{RequestLogger, TokenStats};

/// Handle the default (no subcommand) generation flow
pub async fn handle_generate() -> Result<()> {
    let config = Config::load()?;

    let bullets = read_bullets_from_stdin()?;
    if bullets.is_empty() {
        println!("No bullets provided. Exiting.");
        return Ok(());
    }

    let flat = safety::flatten_bullets(&bullets);

    // Both gates run before any external call; a failed gate means no
    // metadata fetch, no model invocation, and no log entry.
    if !safety::check_length(&flat, config.max_input_chars) {
        return Err(PatchNotesError::InputTooLong {
            length: flat.chars().count(),
            limit: config.max_input_chars,
        });
    }
    if safety::is_prompt_injection(&flat) {
        return Err(PatchNotesError::PromptInjectionDetected);
    }

    let short_description = prompt_short_description()?;

    let metadata = resolve_release_metadata(&bullets, &config.timezone).await;
    let style_guide = load_style_guide(STYLE_GUIDE_PATH);

    let prompt = prompts::build_prompt(
        &bullets,
        &metadata,
        short_description.as_deref(),
        style_guide.as_deref(),
    );

    let client = OllamaClient::new(&config.model);
    println!("\nGenerating patch notes with {}...", client.model_name());

    let (notes, latency) = client.generate(&prompt).await?;

    // Telemetry must never affect the primary flow; the outcome is
    // discarded after tracing.
    if let Err(e) = log_request(&TokenStats::local(latency)) {
        warn!(error = %e, "failed to write telemetry entry");
    }

    println!("\n=== Generated Patch Notes ===\n");
    println!("{}", notes);
    println!("\n=============================\n");

    Ok(())
}

fn log_request(stats: &TokenStats) -> Result<()> {
    let logger = RequestLogger::new(Config::log_path()?)?;
    logger.record("tool", Some(stats))
}

/// Read newline-terminated bullets until a blank line or end-of-input
fn read_bullets_from_stdin() -> Result<Vec<String>> {
    println!("Paste your bullet point changes. One change per line.");
    println!("When you are done, enter a blank line and press Enter.\n");

    let stdin = io::stdin();
    let mut bullets = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            // Blank line ends input
            break;
        }
        bullets.push(line.trim_end().to_string());
    }

    Ok(bullets)
}

/// Ask for an optional one-line release description; blank means none
fn prompt_short_description() -> Result<Option<String>> {
    print!("\nOptional: short description of this release (or leave blank): ");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
