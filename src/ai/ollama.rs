//! Ollama process invocation
//!
//! Spawns `ollama run <model>` per call, pipes the prompt to its stdin,
//! and captures the generated text. The process lives only for the call;
//! there is no reuse, pooling, or retry.

use std::process::Stdio;
use std::time::Instant;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::{PatchNotesError, Result};

/// Client for a locally served Ollama model
pub struct OllamaClient {
    model: String,
}

impl OllamaClient {
    /// Create a client for the given model (e.g. "gemma2:9b")
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// Get the configured model name
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Run the model on a prompt, returning the generated text and the
    /// wall-clock latency in seconds.
    ///
    /// Invalid UTF-8 in the model output is replaced rather than failing
    /// the call. A non-zero exit surfaces the process's stderr.
    pub async fn generate(&self, prompt: &str) -> Result<(String, f64)> {
        debug!(model = %self.model, prompt_chars = prompt.len(), "invoking ollama");
        let start = Instant::now();

        let mut child = Command::new("ollama")
            .args(["run", &self.model])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                PatchNotesError::ModelInvocation(format!("failed to start ollama: {}", e))
            })?;

        // stdin is piped, so take() cannot fail; dropping it closes the
        // stream and lets the process see end-of-input.
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(prompt.as_bytes())
                .await
                .map_err(|e| {
                    PatchNotesError::ModelInvocation(format!("failed to send prompt: {}", e))
                })?;
        }

        let output = child.wait_with_output().await.map_err(|e| {
            PatchNotesError::ModelInvocation(format!("ollama did not complete: {}", e))
        })?;

        let latency = start.elapsed().as_secs_f64();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PatchNotesError::ModelInvocation(failure_message(
                &self.model,
                output.status.code(),
                &stderr,
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(latency_s = latency, output_chars = text.len(), "ollama completed");

        Ok((text, latency))
    }
}

/// Diagnostic for a non-zero exit: the process's stderr verbatim, or a
/// generic message naming the model and exit code when stderr is empty
fn failure_message(model: &str, code: Option<i32>, stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("ollama run {} failed with code {}", model, code.unwrap_or(-1))
    } else {
        stderr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_stderr() {
        let msg = failure_message("gemma2:9b", Some(1), "model not found\n");
        assert_eq!(msg, "model not found");
    }

    #[test]
    fn test_failure_message_falls_back_to_exit_code() {
        let msg = failure_message("gemma2:9b", Some(2), "  ");
        assert!(msg.contains("gemma2:9b"));
        assert!(msg.contains("code 2"));
    }

    #[test]
    fn test_model_name() {
        let client = OllamaClient::new("gemma2:9b");
        assert_eq!(client.model_name(), "gemma2:9b");
    }

    #[tokio::test]
    async fn test_missing_binary_surfaces_model_invocation_error() {
        // Point PATH at an empty dir so the spawn itself fails.
        let dir = tempfile::tempdir().unwrap();
        let original = std::env::var_os("PATH");
        std::env::set_var("PATH", dir.path());

        let client = OllamaClient::new("gemma2:9b");
        let result = client.generate("hello").await;

        match original {
            Some(path) => std::env::set_var("PATH", path),
            None => std::env::remove_var("PATH"),
        }

        match result {
            Err(PatchNotesError::ModelInvocation(msg)) => {
                assert!(msg.contains("failed to start ollama"));
            }
            other => panic!("expected ModelInvocation error, got {:?}", other.map(|_| ())),
        }
    }
}
