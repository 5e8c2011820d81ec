//! Shared test helpers.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temp directory for use as HOSTBLOCK_HOME.
pub fn temp_home() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostblock_test_")
        .tempdir()
        .expect("temp dir")
}

/// Write a hosts file into `dir` and return its path.
pub fn write_hosts(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("hosts");
    fs::write(&path, content).unwrap();
    path
}

/// `hostblock` binary with HOSTBLOCK_HOME and HOSTBLOCK_HOSTS_FILE pointed into `dir`.
pub fn hostblock(dir: &Path, hosts: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("hostblock").unwrap();
    cmd.env("HOSTBLOCK_HOME", dir)
        .env("HOSTBLOCK_HOSTS_FILE", hosts)
        .env_remove("RUST_LOG");
    cmd
}
