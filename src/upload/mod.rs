//! Upload pipeline
//!
//! The two publishing operations (path-based and content-based) share this
//! module's destination-key generation, error mapping, and configuration
//! plumbing. Bytes leave the machine only through the [`Transfer`]
//! implementation injected at construction, so the whole pipeline runs
//! against test doubles without network access.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::config::{Config, StorageConfig};
use crate::transfer::{Transfer, TransferError};

pub mod content;
pub mod path;
pub mod staging;

pub use content::ContentUploadResult;
pub use path::PathUploadResult;

/// Upload errors
///
/// Every failure inside the pipeline is re-expressed as one of these before
/// it reaches the protocol layer; lower-level error types never cross the
/// operation boundary.
#[derive(Error, Debug)]
pub enum UploadError {
    /// Missing or empty required field, nonexistent source path, or
    /// malformed base64 content.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// The outbound PUT failed; the message carries the transfer
    /// diagnostics.
    #[error("transfer failed: {0}")]
    TransferFailed(String),

    /// Unexpected failure during decoding, staging, or result assembly.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for UploadError {
    fn from(err: std::io::Error) -> Self {
        UploadError::Internal(err.to_string())
    }
}

impl From<TransferError> for UploadError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::Failed { .. } => UploadError::TransferFailed(err.to_string()),
            TransferError::Spawn(_) => UploadError::Internal(err.to_string()),
        }
    }
}

/// Remote destination of one upload: a freshly generated folder identifier
/// plus the path-stripped base filename.
///
/// The folder identifier is random per call, so concurrent uploads of the
/// same filename collide neither remotely nor in the staging directory.
#[derive(Debug, Clone)]
pub struct DestinationKey {
    folder_id: Uuid,
    filename: String,
}

impl DestinationKey {
    /// Generate a key for `name`, which may be a bare filename or a path.
    pub fn generate(name: &str) -> Self {
        Self {
            folder_id: Uuid::new_v4(),
            filename: base_name(name).to_string(),
        }
    }

    pub fn folder_id(&self) -> Uuid {
        self.folder_id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Object key under the public prefix: `<folder>/<filename>`.
    pub fn object_key(&self) -> String {
        format!("{}/{}", self.folder_id, self.filename)
    }

    /// Filename for the local staged copy: `<folder>_<filename>`.
    pub fn staging_name(&self) -> String {
        format!("{}_{}", self.folder_id, self.filename)
    }
}

impl std::fmt::Display for DestinationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.folder_id, self.filename)
    }
}

/// Base filename of `name` with any directory components stripped.
fn base_name(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
}

/// Shared state behind the two publishing operations.
pub struct Uploader {
    storage: StorageConfig,
    staging_dir: PathBuf,
    transfer: Arc<dyn Transfer>,
}

impl Uploader {
    /// Build an uploader from configuration and a transfer implementation.
    pub fn new(config: &Config, transfer: Arc<dyn Transfer>) -> Self {
        Self {
            storage: config.storage.clone(),
            staging_dir: config
                .upload
                .staging_dir
                .clone()
                .unwrap_or_else(std::env::temp_dir),
            transfer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_keys_are_unique() {
        let a = DestinationKey::generate("photo.png");
        let b = DestinationKey::generate("photo.png");
        assert_ne!(a.folder_id(), b.folder_id());
        assert_eq!(a.filename(), "photo.png");
        assert_eq!(b.filename(), "photo.png");
    }

    #[test]
    fn test_key_strips_directories() {
        let key = DestinationKey::generate("/var/tmp/shots/photo.png");
        assert_eq!(key.filename(), "photo.png");
        assert_eq!(key.object_key(), format!("{}/photo.png", key.folder_id()));
    }

    #[test]
    fn test_staging_name_joins_with_underscore() {
        let key = DestinationKey::generate("report.pdf");
        assert_eq!(
            key.staging_name(),
            format!("{}_report.pdf", key.folder_id())
        );
    }

    #[test]
    fn test_display_matches_object_key() {
        let key = DestinationKey::generate("a.txt");
        assert_eq!(key.to_string(), key.object_key());
    }

    #[test]
    fn test_transfer_error_mapping() {
        let failed: UploadError = TransferError::Failed {
            status: 22,
            diagnostic: "curl: (22) The requested URL returned error: 500".to_string(),
        }
        .into();
        assert!(matches!(failed, UploadError::TransferFailed(ref msg) if msg.contains("500")));

        let spawn: UploadError = TransferError::Spawn(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no curl",
        ))
        .into();
        assert!(matches!(spawn, UploadError::Internal(_)));
    }
}
