//! Persisted block list (JSON array of strings).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{self, SiteList};
use crate::error::{BlockerError, Result, StoreError};

/// File-backed store for the block list. Every save overwrites the whole file.
#[derive(Debug, Clone)]
pub struct SiteListStore {
    path: PathBuf,
}

impl SiteListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the list; a missing file is an empty list.
    ///
    /// Entries that fail [`domain::is_valid`] are dropped with a warning; an
    /// empty or free-form entry would otherwise match every hosts line.
    pub fn load(&self) -> Result<SiteList> {
        let s = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no site list yet");
                return Ok(SiteList::new());
            }
            Err(e) => return Err(self.error(e.into())),
        };
        let sites: Vec<String> = serde_json::from_str(&s).map_err(|e| self.error(e.into()))?;
        Ok(sites
            .into_iter()
            .filter(|site| {
                let valid = domain::is_valid(site);
                if !valid {
                    warn!(
                        path = %self.path.display(),
                        site = %site,
                        "ignoring invalid site list entry"
                    );
                }
                valid
            })
            .collect())
    }

    /// Overwrite the persisted list. Creates parent dirs if needed.
    pub fn save(&self, sites: &SiteList) -> Result<()> {
        if let Some(p) = self.path.parent() {
            fs::create_dir_all(p).map_err(|e| self.error(e.into()))?;
        }
        let s = serde_json::to_string(sites).map_err(|e| self.error(e.into()))?;
        fs::write(&self.path, s).map_err(|e| self.error(e.into()))?;
        debug!(path = %self.path.display(), sites = sites.len(), "site list saved");
        Ok(())
    }

    fn error(&self, source: StoreError) -> BlockerError {
        BlockerError::Store {
            path: self.path.clone(),
            source,
        }
    }
}
