//! Custom error types for patchnotes
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the patchnotes application
#[derive(Error, Debug)]
pub enum PatchNotesError {
    /// Flattened bullet input exceeds the configured maximum
    #[error("Input is too long ({length} characters, limit is {limit}).\n\n  → Split your changes into multiple runs.")]
    InputTooLong { length: usize, limit: usize },

    /// Input contains a known prompt-injection trigger phrase
    #[error("Refusing to process: detected potential prompt injection (e.g., attempts to ignore safety rules).")]
    PromptInjectionDetected,

    /// The model process exited non-zero or could not be started
    #[error("Patch note generation failed: {0}\n\n  → Make sure Ollama is installed and the model is pulled (ollama pull <model>).")]
    ModelInvocation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Network request error
    #[error("Network request failed: {0}\n\n  → Check your internet connection.")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for PatchNotesError {
    fn from(err: toml::de::Error) -> Self {
        PatchNotesError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for PatchNotesError {
    fn from(err: toml::ser::Error) -> Self {
        PatchNotesError::Toml(err.to_string())
    }
}

/// Result type alias using PatchNotesError
pub type Result<T> = std::result::Result<T, PatchNotesError>;
