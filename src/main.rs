//! s3-publish-mcp - MCP server publishing files to S3-compatible storage
//!
//! Serves the `upload_file` and `upload_file_content` tools over stdio.

use clap::Parser;
use rmcp::{
    service::serve_server,
    transport::{async_rw::AsyncRwTransport, io::stdio},
};
use s3_publish_mcp::{Config, UploadServer};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// s3-publish-mcp - Publish local files and inline content to object storage
#[derive(Parser, Debug)]
#[command(name = "s3-publish-mcp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file; built-in defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging. Stdout carries the MCP protocol, so every
    // diagnostic line must go to stderr.
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // RUST_LOG takes precedence over --log-level when set
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting s3-publish-mcp v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match &args.config {
        Some(path) => {
            let config = Config::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };
    info!(
        origin = %config.storage.origin,
        public_prefix = %config.storage.public_prefix,
        "Publishing target configured"
    );

    // Serve over stdio
    let server = UploadServer::new(&config);
    let (stdin, stdout) = stdio();
    let transport = AsyncRwTransport::new_server(stdin, stdout);

    match serve_server(server, transport).await {
        Ok(running) => {
            if let Err(e) = running.waiting().await {
                tracing::error!(error = %e, "Server terminated with error");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start MCP server");
        }
    }

    info!("Shutting down");
    Ok(())
}
