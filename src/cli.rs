//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `drift`.
#[derive(Debug, Parser)]
#[command(name = "drift", version, about = "Audit build units and plan rebuilds")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Audit the project and print the annotated freshness report.
    Audit {
        /// Audit units one at a time instead of concurrently.
        #[arg(long)]
        sequential: bool,
        /// Project root (defaults to $DRIFT_ROOT, then the current directory).
        #[arg(long)]
        root: Option<PathBuf>,
        /// Units to audit, by path or package name; every target when empty.
        units: Vec<String>,
    },
    /// Print one line per unit that must be rebuilt.
    Plan {
        /// Audit units one at a time instead of concurrently.
        #[arg(long)]
        sequential: bool,
        /// Print the instruction list as a JSON array.
        #[arg(long)]
        json: bool,
        /// Project root (defaults to $DRIFT_ROOT, then the current directory).
        #[arg(long)]
        root: Option<PathBuf>,
        /// Units to plan for, by path or package name; every target when empty.
        units: Vec<String>,
    },
    /// List the project's target units.
    Units {
        /// Project root (defaults to $DRIFT_ROOT, then the current directory).
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_audit_subcommand() {
        let cli = Cli::parse_from(["drift", "audit"]);
        assert!(matches!(cli.command, Command::Audit { sequential: false, .. }));
    }

    #[test]
    fn parses_plan_with_flags_and_units() {
        let cli = Cli::parse_from(["drift", "plan", "--sequential", "--json", "pkgs/app"]);
        match cli.command {
            Command::Plan { sequential, json, units, .. } => {
                assert!(sequential);
                assert!(json);
                assert_eq!(units, vec!["pkgs/app"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_units_with_root() {
        let cli = Cli::parse_from(["drift", "units", "--root", "/somewhere"]);
        match cli.command {
            Command::Units { root } => {
                assert_eq!(root.as_deref(), Some(std::path::Path::new("/somewhere")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
