//! Site validation and the ordered block list.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{BlockerError, Result};

/// `(www.)?label.tld`: one dot after the optional prefix, lowercase TLD of 2+ letters.
static SITE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(www\.)?[\w-]+\.[a-z]{2,}$").expect("static pattern"));

/// Coarse syntactic check for a blockable site.
pub fn is_valid(candidate: &str) -> bool {
    SITE_PATTERN.is_match(candidate)
}

/// Ordered list of unique blocked sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SiteList(Vec<String>);

impl SiteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, site: &str) -> bool {
        self.0.iter().any(|s| s == site)
    }

    /// Validate and append. Duplicates (exact, case-sensitive) are rejected.
    pub fn insert(&mut self, site: &str) -> Result<()> {
        if !is_valid(site) {
            return Err(BlockerError::InvalidFormat(site.to_string()));
        }
        if self.contains(site) {
            return Err(BlockerError::Duplicate(site.to_string()));
        }
        self.0.push(site.to_string());
        Ok(())
    }

    /// Remove the exact entry. Returns false if absent.
    pub fn remove(&mut self, site: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|s| s != site);
        self.0.len() != before
    }

    /// Resolve a selection: a 1-based index as printed by `list`, or the exact site.
    pub fn select(&self, token: &str) -> Option<&str> {
        if let Ok(n) = token.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| self.0.get(i)).map(String::as_str);
        }
        self.0.iter().find(|s| *s == token).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for SiteList {
    /// Collects in order, dropping repeats.
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = SiteList::new();
        for s in iter {
            if !list.contains(&s) {
                list.0.push(s);
            }
        }
        list
    }
}
