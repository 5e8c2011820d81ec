//! Block list mutations and hosts activation.
//!
//! [`Blocker`] owns the in-memory list and is its only mutator; the list is
//! persisted after every change. Front ends read it through [`Blocker::sites`].

use tracing::{info, warn};

use crate::domain::SiteList;
use crate::error::{BlockerError, Result};
use crate::hosts;
use crate::platform::HostsEditor;
use crate::store::SiteListStore;

/// Result of a confirmation-gated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Cancelled,
}

/// Per-site hosts state for `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteStatus {
    pub site: String,
    pub redirected: bool,
}

/// Snapshot of the blocker's on-disk state.
#[derive(Debug, Clone)]
pub struct Status {
    pub hosts_path: std::path::PathBuf,
    pub backup_path: std::path::PathBuf,
    pub backup_present: bool,
    pub sites: Vec<SiteStatus>,
}

pub struct Blocker<'a> {
    store: SiteListStore,
    editor: &'a dyn HostsEditor,
    redirect_ip: String,
    sites: SiteList,
}

impl<'a> Blocker<'a> {
    /// Load the persisted list and bind it to a hosts editor.
    pub fn open(
        store: SiteListStore,
        editor: &'a dyn HostsEditor,
        redirect_ip: impl Into<String>,
    ) -> Result<Self> {
        let sites = store.load()?;
        Ok(Self {
            store,
            editor,
            redirect_ip: redirect_ip.into(),
            sites,
        })
    }

    pub fn sites(&self) -> &SiteList {
        &self.sites
    }

    pub fn redirect_ip(&self) -> &str {
        &self.redirect_ip
    }

    /// Validate and append a site, then persist.
    pub fn add(&mut self, candidate: &str) -> Result<()> {
        let mut next = self.sites.clone();
        next.insert(candidate)?;
        self.commit(next)?;
        info!(site = candidate, "site added");
        Ok(())
    }

    /// Remove the selected site, then persist. Returns the removed entry.
    pub fn remove(&mut self, selected: Option<&str>) -> Result<String> {
        let token = selected.ok_or(BlockerError::NotSelected)?;
        let site = self
            .sites
            .select(token)
            .ok_or_else(|| BlockerError::UnknownSite(token.to_string()))?
            .to_string();
        let mut next = self.sites.clone();
        next.remove(&site);
        self.commit(next)?;
        info!(site = %site, "site removed");
        Ok(site)
    }

    /// Back up the hosts file, then rewrite it with redirect entries for every site.
    pub fn activate(&self, confirmed: bool) -> Result<Outcome> {
        if !confirmed {
            return Ok(Outcome::Cancelled);
        }
        self.rewrite(true)?;
        Ok(Outcome::Done)
    }

    /// Back up the hosts file, then strip every line mentioning a blocked site.
    pub fn deactivate(&self, confirmed: bool) -> Result<Outcome> {
        if !confirmed {
            return Ok(Outcome::Cancelled);
        }
        self.rewrite(false)?;
        Ok(Outcome::Done)
    }

    /// Copy the backup snapshot over the live hosts file.
    pub fn restore_original(&self, confirmed: bool) -> Result<Outcome> {
        if !confirmed {
            return Ok(Outcome::Cancelled);
        }
        self.editor.restore()?;
        Ok(Outcome::Done)
    }

    pub fn status(&self) -> Result<Status> {
        let content = self.editor.read()?;
        let sites = self
            .sites
            .iter()
            .map(|site| SiteStatus {
                site: site.to_string(),
                redirected: hosts::has_redirect(&content, &self.redirect_ip, site),
            })
            .collect();
        Ok(Status {
            hosts_path: self.editor.path().to_path_buf(),
            backup_path: self.editor.backup_path().to_path_buf(),
            backup_present: self.editor.backup_path().is_file(),
            sites,
        })
    }

    fn rewrite(&self, include_redirects: bool) -> Result<()> {
        if self.sites.is_empty() {
            warn!("block list is empty; hosts entries are left unchanged");
        }
        self.editor.backup()?;
        self.editor
            .apply(self.sites.as_slice(), &self.redirect_ip, include_redirects)?;
        Ok(())
    }

    /// Persist first so the in-memory list never runs ahead of the stored one.
    fn commit(&mut self, next: SiteList) -> Result<()> {
        self.store.save(&next)?;
        self.sites = next;
        Ok(())
    }
}
