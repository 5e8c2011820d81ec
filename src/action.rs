//! User actions and uniform result reporting shared by the CLI and the shell.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use crate::blocker::{Blocker, Outcome};
use crate::error::Result;

/// One user-triggered action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Add(String),
    Remove(Option<String>),
    Activate,
    Deactivate,
    Restore,
    Status,
}

impl Action {
    /// Confirmation question for gated actions.
    pub fn question(&self) -> Option<&'static str> {
        match self {
            Action::Activate => Some("Activate the blocker? This rewrites the hosts file."),
            Action::Deactivate => {
                Some("Deactivate the blocker? Blocked entries are removed from the hosts file.")
            }
            Action::Restore => Some("Restore the hosts file from its backup?"),
            _ => None,
        }
    }
}

/// Run `action` against `blocker`, returning the success message.
///
/// `confirm` is asked only for confirmation-gated actions.
pub fn perform(
    blocker: &mut Blocker<'_>,
    action: Action,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Result<String> {
    let confirmed = match action.question() {
        Some(q) => confirm(q),
        None => true,
    };
    match action {
        Action::List => Ok(render_list(blocker)),
        Action::Add(site) => {
            blocker.add(&site)?;
            Ok(format!("Added site: {site}"))
        }
        Action::Remove(selected) => {
            let site = blocker.remove(selected.as_deref())?;
            Ok(format!("Removed site: {site}"))
        }
        Action::Activate => Ok(match blocker.activate(confirmed)? {
            Outcome::Done => format!(
                "Blocker activated: {} site(s) redirected to {}",
                blocker.sites().len(),
                blocker.redirect_ip()
            ),
            Outcome::Cancelled => "Cancelled".to_string(),
        }),
        Action::Deactivate => Ok(match blocker.deactivate(confirmed)? {
            Outcome::Done => "Blocker deactivated".to_string(),
            Outcome::Cancelled => "Cancelled".to_string(),
        }),
        Action::Restore => Ok(match blocker.restore_original(confirmed)? {
            Outcome::Done => "Hosts file restored from backup".to_string(),
            Outcome::Cancelled => "Cancelled".to_string(),
        }),
        Action::Status => render_status(blocker),
    }
}

/// Print a result: message to `out` on success, error to `err` on failure.
/// Returns whether the action succeeded.
pub fn report(result: Result<String>, out: &mut dyn Write, err: &mut dyn Write) -> bool {
    match result {
        Ok(msg) => {
            let _ = writeln!(out, "{msg}");
            true
        }
        Err(e) => {
            tracing::debug!(error = ?e, "action failed");
            let _ = writeln!(err, "Error: {e}");
            false
        }
    }
}

/// Ask a yes/no question; anything but `y`/`yes` (or EOF) means no.
pub fn ask(input: &mut dyn BufRead, out: &mut dyn Write, question: &str) -> io::Result<bool> {
    write!(out, "{question} [y/N] ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn render_list(blocker: &Blocker<'_>) -> String {
    let sites = blocker.sites();
    if sites.is_empty() {
        return "No sites blocked".to_string();
    }
    let mut s = String::new();
    for (i, site) in sites.iter().enumerate() {
        if i > 0 {
            s.push('\n');
        }
        let _ = write!(s, "{}\t{site}", i + 1);
    }
    s
}

fn render_status(blocker: &Blocker<'_>) -> Result<String> {
    let status = blocker.status()?;
    let mut s = String::new();
    let _ = writeln!(s, "hosts: {}", status.hosts_path.display());
    let backup = if status.backup_present { "present" } else { "none" };
    let _ = write!(s, "backup: {} ({backup})", status.backup_path.display());
    for site in &status.sites {
        let state = if site.redirected { "blocked" } else { "not active" };
        let _ = write!(s, "\n{}\t{state}", site.site);
    }
    Ok(s)
}
