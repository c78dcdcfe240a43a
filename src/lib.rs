//! patchnotes - AI-assisted patch notes generator
//!
//! This library turns raw bullet-point change lists into formatted patch
//! notes by prompting a local Ollama model, with input safety screening,
//! release classification, and per-request telemetry.

pub mod ai;
pub mod cli;
pub mod core;
pub mod error;
pub mod telemetry;

pub use error::{PatchNotesError, Result};
