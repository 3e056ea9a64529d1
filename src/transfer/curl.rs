//! curl-backed transfer
//!
//! Runs the system `curl` binary for the outbound PUT. `--fail` turns any
//! non-2xx response into a failed exit, and `-sS` suppresses progress output
//! while keeping error diagnostics. Combined stdout and stderr of the
//! process become the diagnostic attached to a failure.

use std::path::Path;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;

use super::{Transfer, TransferError};
use crate::config::StorageConfig;

/// Production [`Transfer`] implementation backed by the `curl` binary.
pub struct CurlTransfer {
    storage: StorageConfig,
}

impl CurlTransfer {
    /// Create a transfer targeting the configured storage service.
    pub fn new(storage: StorageConfig) -> Self {
        Self { storage }
    }

    /// Argument vector for one PUT. Kept separate from [`Transfer::send`] so
    /// tests can inspect the exact invocation.
    fn put_args(&self, source: &Path, object_key: &str, content_type: &str) -> Vec<String> {
        vec![
            "-sS".to_string(),
            "--fail".to_string(),
            "--upload-file".to_string(),
            source.display().to_string(),
            "--header".to_string(),
            format!("Content-Type: {}", content_type),
            self.storage.object_url(object_key),
        ]
    }
}

#[async_trait]
impl Transfer for CurlTransfer {
    #[tracing::instrument(
        name = "transfer.put",
        skip(self, source, object_key, content_type),
        fields(
            http.method = "PUT",
            http.content_type = %content_type,
            // Result fields - set as the request progresses
            http.url = tracing::field::Empty,
            transfer.exit_status = tracing::field::Empty
        ),
        err
    )]
    async fn send(
        &self,
        source: &Path,
        object_key: &str,
        content_type: &str,
    ) -> Result<(), TransferError> {
        let start_time = Instant::now();
        tracing::Span::current().record("http.url", self.storage.object_url(object_key).as_str());

        let output = Command::new("curl")
            .args(self.put_args(source, object_key, content_type))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        let status = output.status.code().unwrap_or(-1);
        tracing::Span::current().record("transfer.exit_status", status);

        if output.status.success() {
            tracing::info!(
                key = %object_key,
                duration_ms = start_time.elapsed().as_millis(),
                "transfer completed"
            );
            Ok(())
        } else {
            Err(TransferError::Failed {
                status,
                diagnostic: combined_output(&output.stdout, &output.stderr),
            })
        }
    }
}

/// Merge captured stdout and stderr into one trimmed diagnostic string.
fn combined_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut diagnostic = String::from_utf8_lossy(stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        if !diagnostic.is_empty() {
            diagnostic.push('\n');
        }
        diagnostic.push_str(stderr);
    }
    diagnostic
}
