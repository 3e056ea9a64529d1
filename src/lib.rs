//! s3-publish-mcp Library
//!
//! MCP server that publishes files to S3-compatible object storage over
//! plain HTTP PUT and hands back public URLs.
//!
//! # Features
//!
//! - **Two tools, one pipeline**: `upload_file` publishes an existing local
//!   file; `upload_file_content` decodes inline base64, stages it, and
//!   publishes the staged copy
//! - **Collision-free URLs**: every upload lands under a fresh random
//!   folder identifier
//! - **Pluggable transfer**: the outbound PUT sits behind a trait, so the
//!   whole pipeline runs against test doubles
//! - **Self-cleaning staging**: staged files are removed on every exit
//!   path, success or failure
//!
//! # Example
//!
//! ```no_run
//! use s3_publish_mcp::{Config, UploadServer};
//! use rmcp::{
//!     service::serve_server,
//!     transport::{async_rw::AsyncRwTransport, io::stdio},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let server = UploadServer::new(&config);
//!
//!     let (stdin, stdout) = stdio();
//!     let running = serve_server(server, AsyncRwTransport::new_server(stdin, stdout)).await?;
//!     running.waiting().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod mime;
pub mod server;
pub mod transfer;
pub mod upload;

// Re-export commonly used types
pub use config::Config;
pub use server::UploadServer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
