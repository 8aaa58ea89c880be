//! Command dispatch and handlers.

pub mod audit;
pub mod plan;
pub mod units;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// Audits run on a current-thread tokio runtime: concurrency between unit
/// audits is cooperative scheduling, not OS threads.
///
/// # Errors
///
/// Returns an error string if the project cannot be loaded or the selected
/// command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Audit { sequential, root, units } => {
            let ctx = load_context(root.as_deref())?;
            block_on(audit::run(&ctx, units, *sequential))
        }
        Command::Plan { sequential, json, root, units } => {
            let ctx = load_context(root.as_deref())?;
            block_on(plan::run(&ctx, units, *sequential, *json))
        }
        Command::Units { root } => {
            let ctx = load_context(root.as_deref())?;
            units::run(&ctx)
        }
    }
}

fn load_context(root: Option<&Path>) -> Result<Arc<ServiceContext>, String> {
    Ok(Arc::new(ServiceContext::live(&project_root(root))?))
}

/// Resolves the project root: explicit flag first, then `DRIFT_ROOT`, then
/// the current directory.
fn project_root(flag: Option<&Path>) -> PathBuf {
    flag.map_or_else(
        || std::env::var("DRIFT_ROOT").map_or_else(|_| PathBuf::from("."), PathBuf::from),
        Path::to_path_buf,
    )
}

fn block_on<F>(future: F) -> Result<(), String>
where
    F: std::future::Future<Output = Result<(), String>>,
{
    // No I/O or time driver needed: the audit's blocking disk work runs on
    // the runtime's blocking pool.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    runtime.block_on(future)
}
