//! Configuration loader with environment variable expansion

use super::{expand_env_vars, Config, ConfigError};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file.
    ///
    /// Environment references are expanded over the raw file before
    /// parsing, so any field may use `${VAR}` or `${VAR:-default}`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let expanded = expand_env_vars(&content);
        let config: Config = serde_yaml::from_str(&expanded)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
storage:
  origin: "http://localhost:9000"
  public_prefix: "files"
upload:
  staging_dir: "/var/tmp/publish-staging"
"#,
        );

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.storage.origin, "http://localhost:9000");
        assert_eq!(config.storage.public_prefix, "files");
        assert_eq!(
            config.upload.staging_dir,
            Some(std::path::PathBuf::from("/var/tmp/publish-staging"))
        );
    }

    #[test]
    #[serial]
    fn test_load_expands_env_vars() {
        std::env::set_var("PUBLISH_TEST_ORIGIN", "http://storage.test:9000");
        let file = write_config(
            r#"
storage:
  origin: "${PUBLISH_TEST_ORIGIN}"
"#,
        );

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.storage.origin, "http://storage.test:9000");
        std::env::remove_var("PUBLISH_TEST_ORIGIN");
    }

    #[test]
    #[serial]
    fn test_load_uses_env_default_when_unset() {
        std::env::remove_var("PUBLISH_TEST_MISSING");
        let file = write_config(
            r#"
storage:
  origin: "${PUBLISH_TEST_MISSING:-http://fallback:9000}"
"#,
        );

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.storage.origin, "http://fallback:9000");
    }

    #[test]
    fn test_load_rejects_invalid_origin() {
        let file = write_config(
            r#"
storage:
  origin: "not-a-url"
"#,
        );

        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigLoader::load("/definitely/not/a/config.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
