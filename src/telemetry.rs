//! Per-request telemetry logging
//!
//! One JSON line is appended to the request log per model invocation.
//! Logging must never abort the primary flow: `record` returns a Result
//! that the caller explicitly discards.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::error::Result;

/// Token and timing statistics for one model invocation.
///
/// Token counts are unavailable for a local Ollama model and stay None;
/// latency is always filled after a successful call.
#[derive(Debug, Clone, Serialize)]
pub struct TokenStats {
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
    pub latency_s: f64,
}

impl TokenStats {
    /// Stats for a local model, where only latency is known
    pub fn local(latency_s: f64) -> Self {
        Self {
            prompt_tokens: None,
            completion_tokens: None,
            total_tokens: None,
            latency_s,
        }
    }
}

/// One append-only log record; entries are never modified or read back
#[derive(Debug, Serialize)]
struct LogEntry<'a> {
    timestamp: String,
    pathway: &'a str,
    tokens: Option<&'a TokenStats>,
}

/// Append-only request logger bound to a log file path.
///
/// The containing directory is created once at construction, not as a
/// side effect of logging.
pub struct RequestLogger {
    log_path: PathBuf,
}

impl RequestLogger {
    /// Create a logger writing to `log_path`, creating parent directories
    pub fn new(log_path: impl Into<PathBuf>) -> Result<Self> {
        let log_path = log_path.into();
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { log_path })
    }

    /// Get the log file path
    pub fn path(&self) -> &std::path::Path {
        &self.log_path
    }

    /// Append one request record.
    ///
    /// `pathway` tags the code path that produced the request (here always
    /// "tool"). The caller discards the result; a write failure must not
    /// affect the run.
    pub fn record(&self, pathway: &str, tokens: Option<&TokenStats>) -> Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            pathway,
            tokens,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        let line = serde_json::to_string(&entry)?;
        writeln!(file, "{}", line)?;

        Ok(())
    }
}
