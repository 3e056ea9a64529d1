//! Content-based upload
//!
//! Decodes inline base64 payloads, stages them in the staging directory,
//! and publishes the staged copy. Payloads may arrive bare or wrapped in a
//! `data:<mime>;base64,` URI; the wrapper's MIME label participates in type
//! resolution but loses to an explicit parameter.

use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;

use super::staging::StagedFile;
use super::{DestinationKey, UploadError, Uploader};
use crate::mime;

/// Number of leading characters decoded up front, catching malformed
/// payloads before anything touches the disk. A multiple of four, so a
/// prefix of any well-formed payload decodes cleanly on its own.
const BASE64_CHECK_LEN: usize = 100;

/// Successful result of a content-based upload.
#[derive(Debug, Clone, Serialize)]
pub struct ContentUploadResult {
    pub message: String,
    pub filename: String,
    pub folder: String,
    pub mime_type: String,
    pub content_size: u64,
    pub key: String,
    pub url: String,
}

impl Uploader {
    /// Decode `content` and publish it under `filename`.
    ///
    /// MIME precedence: explicit `mime_type`, then the label embedded in a
    /// `data:` URI wrapper, then extension lookup with its
    /// `application/octet-stream` fallback.
    #[tracing::instrument(
        name = "upload.content",
        skip(self, content, filename, mime_type),
        fields(
            file.name = %filename,
            // Result fields - set as the pipeline progresses
            upload.key = tracing::field::Empty,
            upload.bytes = tracing::field::Empty
        ),
        err
    )]
    pub async fn upload_content(
        &self,
        content: &str,
        filename: &str,
        mime_type: Option<&str>,
    ) -> Result<ContentUploadResult, UploadError> {
        if content.is_empty() {
            return Err(UploadError::InvalidParams("content is required".into()));
        }
        if filename.is_empty() {
            return Err(UploadError::InvalidParams("filename is required".into()));
        }

        let (embedded_type, payload) = match split_data_url(content) {
            Some((label, rest)) => (Some(label).filter(|l| !l.is_empty()), rest),
            None => (None, content),
        };

        check_base64_prefix(payload)?;

        let key = DestinationKey::generate(filename);
        tracing::Span::current().record("upload.key", key.object_key().as_str());

        let bytes = general_purpose::STANDARD
            .decode(payload)
            .map_err(|_| UploadError::InvalidParams("invalid base64 content".into()))?;
        tracing::Span::current().record("upload.bytes", bytes.len() as u64);

        let staged = StagedFile::create(&self.staging_dir, &key.staging_name(), &bytes)?;

        let explicit = mime_type.filter(|m| !m.is_empty());
        let mime_type = mime::resolve_for_content(filename, explicit.or(embedded_type));

        // The staged copy is removed by its drop guard on every path out of
        // this call, including transfer failure.
        self.transfer
            .send(staged.path(), &key.object_key(), &mime_type)
            .await?;

        let url = self.storage.object_url(&key.object_key());
        tracing::info!(
            key = %key,
            url = %url,
            mime_type = %mime_type,
            bytes = staged.size(),
            "Content published"
        );

        Ok(ContentUploadResult {
            message: "Content uploaded successfully".to_string(),
            filename: key.filename().to_string(),
            folder: key.folder_id().to_string(),
            mime_type,
            content_size: staged.size(),
            key: key.object_key(),
            url,
        })
    }
}

/// Split a `data:<mime>;base64,<payload>` wrapper into its MIME label and
/// payload. Returns `None` when `content` is not such a wrapper.
fn split_data_url(content: &str) -> Option<(&str, &str)> {
    content.strip_prefix("data:")?.split_once(";base64,")
}

/// Decode a bounded prefix of `payload` as a cheap syntax check before the
/// payload is decoded in full. Character-based so multi-byte input cannot
/// split the prefix mid-codepoint.
fn check_base64_prefix(payload: &str) -> Result<(), UploadError> {
    let prefix: String = payload.chars().take(BASE64_CHECK_LEN).collect();
    general_purpose::STANDARD
        .decode(prefix.as_bytes())
        .map(|_| ())
        .map_err(|_| UploadError::InvalidParams("invalid base64 content".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_data_url() {
        assert_eq!(
            split_data_url("data:image/png;base64,iVBORw0KGgo="),
            Some(("image/png", "iVBORw0KGgo="))
        );
        assert_eq!(split_data_url("data:;base64,aGVsbG8="), Some(("", "aGVsbG8=")));
        assert_eq!(split_data_url("aGVsbG8="), None);
        assert_eq!(split_data_url("data:text/plain,plain-not-base64"), None);
    }

    #[test]
    fn test_prefix_check_accepts_valid_payloads() {
        assert!(check_base64_prefix("aGVsbG8=").is_ok());
        assert!(check_base64_prefix("").is_ok());

        // Longer than the checked prefix; the bound is a multiple of four,
        // so this must still pass.
        let long = "QUJD".repeat(100);
        assert!(check_base64_prefix(&long).is_ok());
    }

    #[test]
    fn test_prefix_check_rejects_garbage() {
        assert!(check_base64_prefix("!!!not-base64!!!").is_err());
        assert!(check_base64_prefix("aGVs bG8=").is_err());
    }

    #[test]
    fn test_prefix_check_survives_multibyte_input() {
        // Invalid as base64, but must fail cleanly rather than panic on a
        // codepoint boundary.
        let multibyte = "ü".repeat(200);
        assert!(check_base64_prefix(&multibyte).is_err());
    }
}
