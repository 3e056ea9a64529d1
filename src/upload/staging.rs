//! Staged upload files
//!
//! Decoded content is written to a uniquely named file in the staging
//! directory before transfer. The staged copy is an implementation detail
//! of one call: it is removed on every exit path, success or failure,
//! through the drop guard.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Ephemeral on-disk copy of decoded upload content.
///
/// Removal happens on drop (RAII pattern), so the file cannot outlive its
/// call even when the transfer fails or the pipeline returns early. A
/// failed removal is logged as a warning and never changes the call's
/// outcome.
pub struct StagedFile {
    path: PathBuf,
    size: u64,
}

impl StagedFile {
    /// Write `data` to `<dir>/<name>`.
    pub fn create(dir: &Path, name: &str, data: &[u8]) -> std::io::Result<Self> {
        let path = dir.join(name);

        let mut file = File::create(&path)?;
        file.write_all(data)?;
        file.flush()?;

        Ok(Self {
            path,
            size: data.len() as u64,
        })
    }

    /// Path of the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decoded size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to clean up staged file"
                );
            }
        }
    }
}
