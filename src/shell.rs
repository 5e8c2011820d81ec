//! Interactive session: read commands until `quit` or EOF.

use std::io::{self, BufRead, Write};

use crate::action::{self, Action};
use crate::blocker::Blocker;

const HELP: &str = "\
Commands:
  list                 show blocked sites with their index
  add <site>           block a site (e.g. www.example.com)
  remove <index|site>  unblock a site
  activate             write redirect entries to the hosts file
  deactivate           remove blocked entries from the hosts file
  restore              restore the hosts file from its backup
  status               show hosts and backup state
  help                 show this help
  quit                 exit";

/// Parsed shell input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Action),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Command::Empty;
    };
    let arg = words.next().map(String::from);
    match cmd {
        "list" | "ls" => Command::Run(Action::List),
        "add" => Command::Run(Action::Add(arg.unwrap_or_default())),
        "remove" | "rm" => Command::Run(Action::Remove(arg)),
        "activate" => Command::Run(Action::Activate),
        "deactivate" => Command::Run(Action::Deactivate),
        "restore" => Command::Run(Action::Restore),
        "status" => Command::Run(Action::Status),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Run the session loop. Action failures are reported and the loop continues.
pub fn run(
    blocker: &mut Blocker<'_>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    writeln!(
        out,
        "hostblock: {} site(s) in block list. Type 'help' for commands.",
        blocker.sites().len()
    )?;
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        match parse(&line) {
            Command::Run(a) => {
                let result = {
                    let mut confirm =
                        |q: &str| action::ask(&mut *input, &mut *out, q).unwrap_or(false);
                    action::perform(blocker, a, &mut confirm)
                };
                action::report(result, out, err);
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(()),
            Command::Empty => {}
            Command::Unknown(cmd) => writeln!(err, "Unknown command: {cmd} (try 'help')")?,
        }
    }
}
