//! Depth-first audit of one unit's dependency subgraph.

use std::future::Future;
use std::pin::Pin;

use crate::audit::cache::FreshnessCache;
use crate::audit::report::UnitReport;
use crate::context::ServiceContext;
use crate::ports::project::Unit;

/// Audits one root unit, producing its annotated report tree.
///
/// The walk is depth-first and keeps an explicit stack of the dependency
/// edges on the current branch. An edge met twice on the same branch marks
/// a cycle; the branch ends there with a cycle-terminator leaf instead of
/// recursing further. Edges are keyed by their package descriptor, not the
/// resolved unit, since two different descriptors may resolve to the same
/// unit without forming a cycle.
pub struct UnitAuditor {
    unit: Unit,
}

impl UnitAuditor {
    /// Creates an auditor for one root unit.
    #[must_use]
    pub fn new(unit: Unit) -> Self {
        Self { unit }
    }

    /// Runs the audit against a shared freshness cache.
    ///
    /// # Errors
    ///
    /// Returns an error if any freshness check in the subtree fails.
    pub async fn audit(
        &self,
        ctx: &ServiceContext,
        cache: &FreshnessCache,
    ) -> Result<UnitReport, String> {
        let mut path = Vec::new();
        let (report, _) = visit(ctx, cache, &self.unit, &mut path).await?;
        Ok(report)
    }
}

/// Visits one unit, fills in its report, and returns it together with the
/// subtree's transitive freshness verdict for the caller to fold upward.
///
/// Boxed because async recursion needs an indirection. The path stack is
/// pushed before each descent and popped right after, so it reflects only
/// the current branch and siblings can never false-positive as cycles.
fn visit<'a>(
    ctx: &'a ServiceContext,
    cache: &'a FreshnessCache,
    unit: &'a Unit,
    path: &'a mut Vec<String>,
) -> Pin<Box<dyn Future<Output = Result<(UnitReport, bool), String>> + Send + 'a>> {
    Box::pin(async move {
        let mut report = UnitReport::new(&unit.path);

        let own = cache.is_fresh(ctx, unit).await?;
        report.files_were_fresh = Some(own.fresh);
        report.file_freshness_from_cache = Some(own.from_cache);

        let mut dependencies_fresh = true;
        for dep in &unit.dependencies {
            // Edges pointing outside the project have no unit to audit.
            let Some(child) = ctx.project.resolve_dependency(dep) else {
                continue;
            };

            let key = dep.edge_key();
            if path.contains(&key) {
                // Revisited edge: terminate the branch. A cycle child is
                // neither fresh nor stale and stays out of the aggregation.
                report.dependencies.insert(key, UnitReport::cycle(&child.path));
                continue;
            }

            path.push(key.clone());
            let (child_report, subtree_fresh) = visit(ctx, cache, &child, path).await?;
            path.pop();

            // The child's own files are checked again here; for units
            // already visited elsewhere this is a cache hit.
            let child_files = cache.is_fresh(ctx, &child).await?;
            if !(subtree_fresh && child_files.fresh) {
                dependencies_fresh = false;
            }
            report.dependencies.insert(key, child_report);
        }

        report.dependencies_were_fresh = Some(dependencies_fresh);
        let fresh = dependencies_fresh && own.fresh;
        report.is_fresh = Some(fresh);
        Ok((report, fresh))
    })
}
