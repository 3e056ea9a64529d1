//! MCP server module
//!
//! Thin protocol surface over the upload pipeline. Declares the tool
//! capability, routes `upload_file` and `upload_file_content` calls, and
//! maps pipeline errors onto protocol error codes. Everything below this
//! module is transport-agnostic; the transport itself (stdio) is wired up
//! in `main`.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter, model::*, tool_handler, ServerHandler,
};

use crate::upload::Uploader;

pub mod tools;


/// MCP server exposing the two publishing tools.
#[derive(Clone)]
pub struct UploadServer {
    uploader: Arc<Uploader>,
    tool_router: ToolRouter<UploadServer>,
}

#[tool_handler]
impl ServerHandler for UploadServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "s3-publish-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Publishes local files or inline base64 content to object storage \
                 and returns a public URL for each uploaded file."
                    .to_string(),
            ),
        }
    }
}
