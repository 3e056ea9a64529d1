//! Outbound transfer
//!
//! The single point where bytes leave the machine. The upload pipeline only
//! talks to the [`Transfer`] trait; production wires in [`CurlTransfer`],
//! tests substitute doubles that script success, non-2xx responses, and
//! launch failures.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

mod curl;

pub use curl::CurlTransfer;

/// Transfer errors
#[derive(Error, Debug)]
pub enum TransferError {
    /// The transfer process could not be launched at all.
    #[error("failed to launch transfer process: {0}")]
    Spawn(#[from] std::io::Error),

    /// The process ran and reported failure. Connection errors and non-2xx
    /// responses both end up here; the diagnostic carries the captured
    /// process output.
    #[error("exit status {status}: {diagnostic}")]
    Failed { status: i32, diagnostic: String },
}

/// One outbound HTTP PUT per call. Implementations do not retry and do not
/// follow up on partial transfers.
#[async_trait]
pub trait Transfer: Send + Sync {
    /// Publish the file at `source` under `object_key` with the given
    /// content type. `Ok(())` means the storage service acknowledged the
    /// object with a 2xx response.
    async fn send(
        &self,
        source: &Path,
        object_key: &str,
        content_type: &str,
    ) -> Result<(), TransferError>;
}
