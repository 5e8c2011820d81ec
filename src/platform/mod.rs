//! Platform abstraction for the hosts file.

use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::backup_path;
use crate::error::HostsError;
use crate::hosts;

/// System hosts file location.
#[cfg(windows)]
pub const HOSTS_PATH: &str = r"C:\Windows\System32\drivers\etc\hosts";

/// System hosts file location.
#[cfg(not(windows))]
pub const HOSTS_PATH: &str = "/etc/hosts";

/// Trait for hosts file operations.
pub trait HostsEditor {
    /// Live hosts file path.
    fn path(&self) -> &Path;
    /// Backup snapshot path.
    fn backup_path(&self) -> &Path;
    /// Snapshot the live file unless a backup already exists. Returns true if one was written.
    fn backup(&self) -> Result<bool, HostsError>;
    /// Copy the backup over the live file.
    fn restore(&self) -> Result<(), HostsError>;
    /// Strip lines mentioning `blocked`; append redirect entries when `include_redirects`.
    fn apply(
        &self,
        blocked: &[String],
        redirect_ip: &str,
        include_redirects: bool,
    ) -> Result<(), HostsError>;
    /// Current live content.
    fn read(&self) -> Result<String, HostsError>;
}

/// HostsEditor that reads/writes a file at the given path.
#[derive(Debug, Clone)]
pub struct FileHostsEditor {
    path: PathBuf,
    backup: PathBuf,
}

impl FileHostsEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let backup = backup_path(&path);
        Self { path, backup }
    }

    pub fn has_backup(&self) -> bool {
        self.backup.is_file()
    }
}

impl HostsEditor for FileHostsEditor {
    fn path(&self) -> &Path {
        &self.path
    }

    fn backup_path(&self) -> &Path {
        &self.backup
    }

    fn backup(&self) -> Result<bool, HostsError> {
        if self.backup.exists() {
            debug!(backup = %self.backup.display(), "backup already present");
            return Ok(false);
        }
        fs::copy(&self.path, &self.backup).map_err(|e| {
            // A missing source is the live file's fault, not the backup's.
            if self.path.exists() {
                HostsError::from_io(&self.backup, e)
            } else {
                HostsError::from_io(&self.path, e)
            }
        })?;
        info!(backup = %self.backup.display(), "hosts backup created");
        Ok(true)
    }

    fn restore(&self) -> Result<(), HostsError> {
        if !self.backup.is_file() {
            return Err(HostsError::BackupNotFound(self.backup.clone()));
        }
        fs::copy(&self.backup, &self.path).map_err(|e| HostsError::from_io(&self.path, e))?;
        info!(hosts = %self.path.display(), "hosts restored from backup");
        Ok(())
    }

    fn apply(
        &self,
        blocked: &[String],
        redirect_ip: &str,
        include_redirects: bool,
    ) -> Result<(), HostsError> {
        let io_err = |e| HostsError::from_io(&self.path, e);
        let mut file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(io_err)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(io_err)?;

        let new_content = hosts::rewrite(&content, blocked, redirect_ip, include_redirects);

        file.seek(SeekFrom::Start(0)).map_err(io_err)?;
        file.write_all(new_content.as_bytes()).map_err(io_err)?;
        file.set_len(new_content.len() as u64).map_err(io_err)?;
        file.flush().map_err(io_err)?;
        info!(
            hosts = %self.path.display(),
            sites = blocked.len(),
            include_redirects,
            "hosts file rewritten"
        );
        Ok(())
    }

    fn read(&self) -> Result<String, HostsError> {
        fs::read_to_string(&self.path).map_err(|e| HostsError::from_io(&self.path, e))
    }
}

/// Get the HostsEditor for the resolved hosts path.
pub fn default_hosts_editor(hosts_path: impl Into<PathBuf>) -> Box<dyn HostsEditor> {
    Box::new(FileHostsEditor::new(hosts_path))
}
