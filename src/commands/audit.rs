//! `drift audit` command.

use std::sync::Arc;

use crate::audit::ProjectAuditor;
use crate::context::ServiceContext;

/// Execute the `audit` command: run a project audit and print the annotated
/// per-unit report as YAML.
///
/// # Errors
///
/// Returns an error string if the audit fails or the report cannot be
/// rendered.
pub async fn run(
    ctx: &Arc<ServiceContext>,
    targets: &[String],
    sequential: bool,
) -> Result<(), String> {
    let report = ProjectAuditor::new(Arc::clone(ctx)).audit(targets, sequential).await?;
    let yaml =
        serde_yaml::to_string(&report).map_err(|e| format!("failed to render report: {e}"))?;
    print!("{yaml}");
    Ok(())
}
