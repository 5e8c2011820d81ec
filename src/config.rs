//! Settings loading and path resolution.
//!
//! Supports HOSTBLOCK_HOME and HOSTBLOCK_HOSTS_FILE env var overrides for testing.

use anyhow::{Context, Result};
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::platform;

/// Default address blocked domains resolve to.
pub const DEFAULT_REDIRECT_IP: &str = "127.0.0.1";

/// Suffix appended to the hosts path to name its backup.
pub const BACKUP_SUFFIX: &str = ".bak";

/// File name of the persisted block list, relative to the data dir.
pub const SITES_FILE_NAME: &str = "blocked_sites.json";

/// Paths for hostblock data.
#[derive(Debug, Clone)]
pub struct BlockerPaths {
    pub data_dir: PathBuf,
    pub config_file: PathBuf,
    pub sites_file: PathBuf,
}

impl BlockerPaths {
    /// Build paths from base directory (e.g. ProjectDirs data dir or HOSTBLOCK_HOME).
    pub fn from_base(base: PathBuf) -> Self {
        Self {
            config_file: base.join("config.toml"),
            sites_file: base.join(SITES_FILE_NAME),
            data_dir: base,
        }
    }

    /// Paths for testing: use a temp dir as base.
    pub fn for_test(base: impl AsRef<Path>) -> Self {
        Self::from_base(base.as_ref().to_path_buf())
    }

    /// Get default paths (respects HOSTBLOCK_HOME).
    pub fn default_paths() -> Self {
        let base = if let Ok(home) = std::env::var("HOSTBLOCK_HOME") {
            PathBuf::from(home)
        } else if let Some(dirs) = directories::ProjectDirs::from("org", "hostblock", "hostblock")
        {
            dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from(".hostblock")
        };
        Self::from_base(base)
    }
}

/// config.toml structure.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub redirect_ip: String,
    pub hosts_file: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            redirect_ip: DEFAULT_REDIRECT_IP.to_string(),
            hosts_file: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings; a missing file yields defaults.
    pub fn load(paths: &BlockerPaths) -> Result<Settings> {
        if !paths.config_file.is_file() {
            return Ok(Settings::default());
        }
        let s = fs::read_to_string(&paths.config_file)
            .with_context(|| format!("read {}", paths.config_file.display()))?;
        let settings: Settings = toml::from_str(&s)
            .with_context(|| format!("parse {}", paths.config_file.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings, creating the data dir if needed.
    pub fn save(&self, paths: &BlockerPaths) -> Result<()> {
        if let Some(p) = paths.config_file.parent() {
            fs::create_dir_all(p)?;
        }
        let s = toml::to_string_pretty(self)?;
        fs::write(&paths.config_file, s)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.redirect_ip
            .parse::<IpAddr>()
            .with_context(|| format!("redirect_ip {:?} is not an IP address", self.redirect_ip))?;
        Ok(())
    }

    /// Live hosts path: HOSTBLOCK_HOSTS_FILE, then `hosts_file`, then the platform default.
    pub fn hosts_path(&self) -> PathBuf {
        if let Ok(path) = std::env::var("HOSTBLOCK_HOSTS_FILE") {
            return PathBuf::from(path);
        }
        self.hosts_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(platform::HOSTS_PATH))
    }
}

/// Backup location for a hosts file: same path with `.bak` appended.
pub fn backup_path(hosts: &Path) -> PathBuf {
    let mut s = hosts.as_os_str().to_os_string();
    s.push(BACKUP_SUFFIX);
    PathBuf::from(s)
}
