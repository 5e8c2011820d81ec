//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};

use crate::action::{self, Action};
use crate::blocker::Blocker;
use crate::config::{BlockerPaths, Settings};
use crate::platform;
use crate::store::SiteListStore;

#[derive(Parser)]
#[command(name = "hostblock")]
#[command(about = "Block websites by redirecting them to localhost in the hosts file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List blocked sites with their index
    List,
    /// Add a site to the block list (e.g. www.example.com)
    Add { site: String },
    /// Remove a site by name or by the index shown in `list`
    Remove { site: Option<String> },
    /// Back up the hosts file and write redirect entries for every blocked site
    Activate(ConfirmArgs),
    /// Back up the hosts file and remove every line mentioning a blocked site
    Deactivate(ConfirmArgs),
    /// Restore the hosts file from its backup
    Restore(ConfirmArgs),
    /// Show hosts path, backup state and whether each site is redirected
    Status,
    /// Interactive session (list, add, remove, activate, ...)
    Shell,
    /// Manage settings in config.toml (init, show)
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Write a default config.toml unless one already exists
    Init,
    /// Print resolved settings and paths
    Show,
}

#[derive(Args)]
pub struct ConfirmArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = BlockerPaths::default_paths();
    let settings = Settings::load(&paths)?;
    crate::logging::init(&settings);

    let editor = platform::default_hosts_editor(settings.hosts_path());
    let editor = editor.as_ref();
    let store = SiteListStore::new(&paths.sites_file);
    let open = || Blocker::open(store.clone(), editor, settings.redirect_ip.clone());

    let (action, skip_confirm) = match cli.command {
        Commands::Config { cmd } => return cmd_config(&paths, &settings, cmd),
        Commands::Shell => {
            let mut blocker = open()?;
            let stdin = io::stdin();
            let (mut out, mut err) = (io::stdout(), io::stderr());
            crate::shell::run(&mut blocker, &mut stdin.lock(), &mut out, &mut err)?;
            return Ok(());
        }
        Commands::List => (Action::List, true),
        Commands::Add { site } => (Action::Add(site), true),
        Commands::Remove { site } => (Action::Remove(site), true),
        Commands::Activate(c) => (Action::Activate, c.yes),
        Commands::Deactivate(c) => (Action::Deactivate, c.yes),
        Commands::Restore(c) => (Action::Restore, c.yes),
        Commands::Status => (Action::Status, true),
    };
    let mut blocker = open()?;

    let mut confirm = |q: &str| {
        skip_confirm || action::ask(&mut io::stdin().lock(), &mut io::stdout(), q).unwrap_or(false)
    };
    let result = action::perform(&mut blocker, action, &mut confirm);
    let mut stdout = io::stdout();
    if !action::report(result, &mut stdout, &mut io::stderr()) {
        let _ = stdout.flush();
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_config(paths: &BlockerPaths, settings: &Settings, cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Init => {
            if paths.config_file.is_file() {
                println!("Config already exists: {}", paths.config_file.display());
            } else {
                Settings::default().save(paths)?;
                println!("Wrote default config: {}", paths.config_file.display());
            }
            Ok(())
        }
        ConfigCmd::Show => {
            println!("config: {}", paths.config_file.display());
            println!("sites: {}", paths.sites_file.display());
            println!("hosts: {}", settings.hosts_path().display());
            println!("redirect_ip: {}", settings.redirect_ip);
            println!("log_level: {}", settings.log_level);
            Ok(())
        }
    }
}
