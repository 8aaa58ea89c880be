//! Project-level audit orchestration.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::audit::cache::FreshnessCache;
use crate::audit::report::ProjectReport;
use crate::audit::unit::UnitAuditor;
use crate::context::ServiceContext;
use crate::ports::project::Unit;

/// Runs one audit per target unit and assembles the project report.
///
/// All unit audits share a single [`FreshnessCache`], so a unit reached
/// from several targets is scanned once for the whole run.
pub struct ProjectAuditor {
    ctx: Arc<ServiceContext>,
}

impl ProjectAuditor {
    /// Creates an auditor over the given context.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Audits the project's target units.
    ///
    /// `targets` narrows the audit to the named units (matched by path or
    /// package name); empty means every target unit. With `sequential`
    /// each unit audit completes before the next starts; otherwise all
    /// audits run as concurrent tasks on the cooperative scheduler and are
    /// joined at the end — the shared cache keeps that race-free at the
    /// result level.
    ///
    /// # Errors
    ///
    /// Returns an error if the project state cannot be restored, the
    /// previous-run log cannot be loaded, a requested target is unknown,
    /// or any unit audit fails. There is no partial-results mode.
    pub async fn audit(
        &self,
        targets: &[String],
        sequential: bool,
    ) -> Result<ProjectReport, String> {
        self.ctx
            .project
            .restore_installed_state()
            .map_err(|e| format!("failed to restore project state: {e}"))?;
        let log = self
            .ctx
            .build_log
            .load()
            .map_err(|e| format!("failed to load previous build log: {e}"))?;

        let units = select_targets(&self.ctx.project.target_units(), targets)?;
        let cache = Arc::new(FreshnessCache::new(log));

        let mut reports = BTreeMap::new();
        if sequential {
            for unit in units {
                let report = UnitAuditor::new(unit.clone()).audit(&self.ctx, &cache).await?;
                reports.insert(unit.path, report);
            }
        } else {
            let mut audits = JoinSet::new();
            for unit in units {
                let ctx = Arc::clone(&self.ctx);
                let cache = Arc::clone(&cache);
                audits.spawn(async move {
                    let path = unit.path.clone();
                    let report = UnitAuditor::new(unit).audit(&ctx, &cache).await;
                    (path, report)
                });
            }
            while let Some(joined) = audits.join_next().await {
                let (path, report) = joined.map_err(|e| format!("audit task failed: {e}"))?;
                reports.insert(path, report?);
            }
        }

        Ok(ProjectReport { units: reports })
    }
}

/// Narrows the target set to the requested units, by path or package name.
fn select_targets(available: &[Unit], requested: &[String]) -> Result<Vec<Unit>, String> {
    if requested.is_empty() {
        return Ok(available.to_vec());
    }
    let mut selected = Vec::new();
    for name in requested {
        let unit = available
            .iter()
            .find(|u| &u.path == name || &u.name == name)
            .ok_or_else(|| format!("unknown unit: {name}"))?;
        selected.push(unit.clone());
    }
    Ok(selected)
}
