//! `drift plan` command.

use std::sync::Arc;

use crate::audit::{unroll, ProjectAuditor};
use crate::context::ServiceContext;

/// Execute the `plan` command: audit the project, unroll the report into
/// build instructions, and print them.
///
/// The printed list is not deduplicated; a unit reached from several stale
/// dependents appears once per dependent.
///
/// # Errors
///
/// Returns an error string if the audit fails or JSON rendering fails.
pub async fn run(
    ctx: &Arc<ServiceContext>,
    targets: &[String],
    sequential: bool,
    json: bool,
) -> Result<(), String> {
    let report = ProjectAuditor::new(Arc::clone(ctx)).audit(targets, sequential).await?;
    let instructions = unroll(&report);

    if json {
        let rendered = serde_json::to_string_pretty(&instructions)
            .map_err(|e| format!("failed to render instructions: {e}"))?;
        println!("{rendered}");
    } else if instructions.is_empty() {
        println!("Nothing to rebuild; every unit is fresh.");
    } else {
        for instruction in &instructions {
            println!("{}", instruction.unit);
        }
    }
    Ok(())
}
