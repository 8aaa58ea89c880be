//! Binary entrypoint for the `drift` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match drift::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
