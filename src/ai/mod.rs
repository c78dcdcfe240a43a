//! AI integration module
//!
//! This module provides local LLM integration via Ollama for turning
//! bullet-point change lists into formatted patch notes.

pub mod ollama;
pub mod prompts;

pub use ollama::OllamaClient;
