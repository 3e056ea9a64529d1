//! Tool implementations and their parameter schemas.

use std::sync::Arc;

use rmcp::{
    handler::server::wrapper::Parameters, model::*, schemars, tool, tool_router,
};

use super::UploadServer;
use crate::config::Config;
use crate::transfer::{CurlTransfer, Transfer};
use crate::upload::{UploadError, Uploader};

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UploadFileParams {
    /// Path of the local file to publish.
    pub file_path: String,
    /// Explicit content type; overrides extension-based detection.
    pub content_type: Option<String>,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UploadFileContentParams {
    /// Base64-encoded file bytes, optionally wrapped in a `data:` URI.
    pub content: String,
    /// Filename to publish the content under.
    pub filename: String,
    /// Explicit MIME type; overrides the `data:` URI label and
    /// extension-based detection.
    pub mime_type: Option<String>,
}

#[tool_router]
impl UploadServer {
    /// Build a server backed by the production curl transfer.
    pub fn new(config: &Config) -> Self {
        Self::with_transfer(config, Arc::new(CurlTransfer::new(config.storage.clone())))
    }

    /// Build a server with a caller-supplied transfer implementation.
    pub fn with_transfer(config: &Config, transfer: Arc<dyn Transfer>) -> Self {
        Self {
            uploader: Arc::new(Uploader::new(config, transfer)),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Upload a local file to storage and return its public URL")]
    pub async fn upload_file(
        &self,
        Parameters(params): Parameters<UploadFileParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self
            .uploader
            .upload_path(&params.file_path, params.content_type.as_deref())
            .await
            .map_err(to_error_data)?;

        render(&result)
    }

    #[tool(
        description = "Upload base64-encoded content as a file to storage and return its public URL"
    )]
    pub async fn upload_file_content(
        &self,
        Parameters(params): Parameters<UploadFileContentParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let result = self
            .uploader
            .upload_content(
                &params.content,
                &params.filename,
                params.mime_type.as_deref(),
            )
            .await
            .map_err(to_error_data)?;

        render(&result)
    }
}

/// Map pipeline errors onto protocol error codes.
fn to_error_data(err: UploadError) -> ErrorData {
    match err {
        UploadError::InvalidParams(message) => ErrorData::invalid_params(message, None),
        UploadError::TransferFailed(detail) => {
            ErrorData::internal_error(format!("Transfer failed: {detail}"), None)
        }
        UploadError::Internal(message) => ErrorData::internal_error(message, None),
    }
}

/// Render a result record as pretty-printed JSON text content.
fn render<T: serde::Serialize>(result: &T) -> Result<CallToolResult, ErrorData> {
    let body = serde_json::to_string_pretty(result)
        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(body)]))
}
