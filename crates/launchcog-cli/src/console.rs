//! Console/status reporting with a verbosity ladder.

use colored::Colorize;

/// How chatty the run is, from `--quiet` up to `--debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Resolves the CLI flags; the most specific flag wins, quiet last.
    pub fn from_flags(quiet: bool, verbose: bool, debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if verbose {
            Verbosity::Verbose
        } else if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

/// Thin wrapper over stdout/stderr that applies the verbosity ladder.
///
/// Warnings and errors always print, to stderr, with the remainder of a
/// multi-line message indented under the label.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    verbosity: Verbosity,
}

impl Console {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Normal status line, suppressed by `--quiet`.
    pub fn status(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            println!("{}", message);
        }
    }

    /// Extra detail, shown with `--verbose` or `--debug`.
    pub fn verbose(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            println!("{}", message.dimmed());
        }
    }

    /// Diagnostics, shown only with `--debug`.
    pub fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Debug {
            println!("{} {}", "debug:".cyan(), message);
        }
    }

    pub fn warning(&self, message: &str) {
        emit(&"warning:".yellow().bold().to_string(), message);
    }

    pub fn error(&self, message: &str) {
        emit(&"error:".red().bold().to_string(), message);
    }
}

fn emit(label: &str, message: &str) {
    let mut lines = message.lines();
    match lines.next() {
        Some(first) => eprintln!("{} {}", label, first),
        None => eprintln!("{}", label),
    }
    for line in lines {
        eprintln!("    {}", line);
    }
}
