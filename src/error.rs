//! Error types surfaced by blocker actions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a user-facing blocker action.
#[derive(Debug, Error)]
pub enum BlockerError {
    #[error("invalid site {0:?} (expected e.g. www.example.com)")]
    InvalidFormat(String),

    #[error("site {0:?} is already in the block list")]
    Duplicate(String),

    #[error("no site selected to remove")]
    NotSelected,

    #[error("site {0:?} is not in the block list")]
    UnknownSite(String),

    #[error("permission denied: {0:?}; run hostblock as administrator (or with sudo)")]
    PermissionDenied(PathBuf),

    #[error("no hosts backup found at {0:?}")]
    BackupNotFound(PathBuf),

    #[error("could not read or write site list {path:?}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: StoreError,
    },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BlockerError {
    /// True for the insufficient-privilege failure, which has its own remediation.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, BlockerError::PermissionDenied(_))
    }
}

/// Site list persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("malformed site list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Hosts file editor errors.
#[derive(Debug, Error)]
pub enum HostsError {
    #[error("permission denied: {0:?}")]
    PermissionDenied(PathBuf),

    #[error("backup not found: {0:?}")]
    BackupNotFound(PathBuf),

    #[error("I/O error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HostsError {
    /// Classify an I/O error on `path`, splitting out permission failures.
    pub fn from_io(path: impl Into<PathBuf>, e: io::Error) -> Self {
        let path = path.into();
        match e.kind() {
            io::ErrorKind::PermissionDenied => HostsError::PermissionDenied(path),
            _ => HostsError::Io { path, source: e },
        }
    }
}

impl From<HostsError> for BlockerError {
    fn from(e: HostsError) -> Self {
        match e {
            HostsError::PermissionDenied(p) => BlockerError::PermissionDenied(p),
            HostsError::BackupNotFound(p) => BlockerError::BackupNotFound(p),
            HostsError::Io { path, source } => BlockerError::Io { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, BlockerError>;
