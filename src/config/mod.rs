//! Configuration module for s3-publish-mcp
//!
//! Handles loading and parsing of YAML configuration files with support for
//! environment variable expansion and validation. The server is usually
//! spawned by an MCP client with no arguments at all, so every field has a
//! default and an absent config file is a fully supported setup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod loader;

pub use loader::ConfigLoader;

// ============================================================================
// Environment Variable Expansion
// ============================================================================

/// Expand environment variables in a string.
///
/// Supports two syntaxes:
/// - `${VAR_NAME}` - Simple expansion, keeps placeholder if var not found
/// - `${VAR_NAME:-default}` - Expansion with default value
///
/// Variable names must start with a letter or underscore and contain only
/// uppercase letters, digits, and underscores.
fn expand_env_vars(s: &str) -> String {
    // Regex to capture ${VAR} or ${VAR:-default}
    let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]+))?\}").unwrap();
    let mut last_match = 0;
    let mut result = String::with_capacity(s.len());

    for cap in re.captures_iter(s) {
        let full_match = cap.get(0).unwrap();
        let var_name = cap.get(1).unwrap().as_str();

        // Append the text before the match
        result.push_str(&s[last_match..full_match.start()]);

        // Get value from env, or use default from regex
        let value = match std::env::var(var_name) {
            Ok(val) => val,
            Err(_) => {
                if let Some(default) = cap.get(2) {
                    default.as_str().to_string()
                } else {
                    // No env var and no default. Keep the original placeholder.
                    full_match.as_str().to_string()
                }
            }
        };
        result.push_str(&value);

        last_match = full_match.end();
    }

    // Append the rest of the string after the last match
    result.push_str(&s[last_match..]);

    result
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Validate that a URL starts with http:// or https://
fn is_valid_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        ConfigLoader::load(path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_http_url(&self.storage.origin) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid storage origin '{}': must start with http:// or https://",
                self.storage.origin
            )));
        }

        if self.storage.public_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "Storage public_prefix cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

/// Storage service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Origin of the S3-compatible storage service
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Path prefix under which published objects are publicly addressable
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
}

impl StorageConfig {
    /// Address of an object key under the public prefix.
    ///
    /// The outbound PUT and the public link handed back to the caller use
    /// the same URL.
    pub fn object_url(&self, object_key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.origin.trim_end_matches('/'),
            self.public_prefix,
            object_key
        )
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            public_prefix: default_public_prefix(),
        }
    }
}

fn default_origin() -> String {
    "https://s3.reily.app".to_string()
}

fn default_public_prefix() -> String {
    "public".to_string()
}

/// Upload staging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory for staged content uploads; system temp dir when unset
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,
}
