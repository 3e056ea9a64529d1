//! Binary smoke tests
//!
//! Verifies the CLI surface without speaking any MCP. Startup with a bad
//! config must fail loudly; everything else about the process is covered by
//! the in-crate server tests.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_flags() {
    Command::new(assert_cmd::cargo::cargo_bin!("s3-publish-mcp"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn test_version_flag() {
    Command::new(assert_cmd::cargo::cargo_bin!("s3-publish-mcp"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_config_file_fails() {
    Command::new(assert_cmd::cargo::cargo_bin!("s3-publish-mcp"))
        .args(["--config", "/definitely/not/a/config.yaml"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(&config_path, "storage:\n  origin: \"not-a-url\"\n").unwrap();

    Command::new(assert_cmd::cargo::cargo_bin!("s3-publish-mcp"))
        .args(["--config", &config_path.display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
