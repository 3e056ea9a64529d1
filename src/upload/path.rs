//! Path-based upload
//!
//! Publishes an existing local file straight from disk. The source file is
//! read in place by the transfer; nothing is copied and nothing is deleted.

use std::path::Path;

use serde::Serialize;

use super::{DestinationKey, UploadError, Uploader};
use crate::mime;

/// Successful result of a path-based upload.
#[derive(Debug, Clone, Serialize)]
pub struct PathUploadResult {
    pub message: String,
    pub file_path: String,
    pub folder: String,
    pub filename: String,
    pub content_type: String,
    pub key: String,
    pub url: String,
}

impl Uploader {
    /// Publish the file at `path` and return its public URL.
    ///
    /// `content_type` overrides extension-based detection when supplied.
    #[tracing::instrument(
        name = "upload.path",
        skip(self, path, content_type),
        fields(
            file.path = %path,
            http.content_type = ?content_type,
            // Result field - set once the key is generated
            upload.key = tracing::field::Empty
        ),
        err
    )]
    pub async fn upload_path(
        &self,
        path: &str,
        content_type: Option<&str>,
    ) -> Result<PathUploadResult, UploadError> {
        if path.is_empty() {
            return Err(UploadError::InvalidParams("file_path is required".into()));
        }
        if !Path::new(path).exists() {
            return Err(UploadError::InvalidParams(format!("file not found: {path}")));
        }

        let key = DestinationKey::generate(path);
        tracing::Span::current().record("upload.key", key.object_key().as_str());

        let content_type = mime::resolve_for_path(path, content_type);

        self.transfer
            .send(Path::new(path), &key.object_key(), &content_type)
            .await?;

        let url = self.storage.object_url(&key.object_key());
        tracing::info!(
            key = %key,
            url = %url,
            content_type = %content_type,
            "File published"
        );

        Ok(PathUploadResult {
            message: "File uploaded successfully".to_string(),
            file_path: path.to_string(),
            folder: key.folder_id().to_string(),
            filename: key.filename().to_string(),
            content_type,
            key: key.object_key(),
            url,
        })
    }
}
