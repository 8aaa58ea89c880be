//! Core library entry for the `drift` CLI.
//!
//! `drift` decides which units of a multi-unit project must be rebuilt: it
//! audits each unit's source tree against the previous run's build log,
//! propagates staleness along dependency edges, and flattens the result
//! into a list of build instructions.

pub mod adapters;
pub mod audit;
pub mod cli;
pub mod commands;
pub mod context;
pub mod ports;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution
/// fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Help and version are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["drift", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_treats_help_as_success() {
        let result = run(["drift", "--help"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_missing_project() {
        let dir = std::env::temp_dir().join("drift_lib_run_missing_project");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let result = run(["drift", "units", "--root", dir.to_str().unwrap()]);
        assert!(result.unwrap_err().contains("no project found"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
