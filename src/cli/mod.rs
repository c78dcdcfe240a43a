//! CLI module for patchnotes
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod commands;
pub mod config;
pub mod eval;
pub mod generate;

pub use commands::{Cli, Commands};
