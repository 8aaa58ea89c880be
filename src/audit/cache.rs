//! Per-run memoization of own-file freshness verdicts.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::context::ServiceContext;
use crate::ports::build_log::BuildLog;
use crate::ports::project::Unit;

/// Conventional subdirectory of a unit holding the sources whose
/// modification times drive freshness.
pub const SOURCE_SUBDIR: &str = "src";

/// Own-files freshness verdict for one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileVerdict {
    /// `true` when the unit's sources are unchanged since its baseline.
    pub fresh: bool,
    /// `true` when this verdict came from a cache hit.
    pub from_cache: bool,
}

/// Memoizes own-file freshness for the duration of one project audit.
///
/// The scanner's walk is the expensive part of an audit, so the cache
/// guarantees it runs at most once per unit per run no matter how many
/// dependents traverse into the unit. The verdict map is guarded by an
/// async mutex that stays held across the scan: concurrent first callers
/// for the same unit queue up and all but one see a cache hit.
pub struct FreshnessCache {
    log: BuildLog,
    verdicts: Mutex<HashMap<String, bool>>,
}

impl FreshnessCache {
    /// Creates a cache over the previous run's log.
    #[must_use]
    pub fn new(log: BuildLog) -> Self {
        Self { log, verdicts: Mutex::new(HashMap::new()) }
    }

    /// Returns `true` if a verdict for `unit` has already been computed.
    /// Pure query; never triggers a scan.
    pub async fn was_checked(&self, unit: &Unit) -> bool {
        self.verdicts.lock().await.contains_key(&unit.path)
    }

    /// Returns the unit's own-files verdict, scanning on first access.
    ///
    /// The baseline is the timestamp recorded when the unit was last built;
    /// a unit absent from the log baselines against the current time, which
    /// in practice marks it stale (the scan's result predates "now"). The
    /// comparison is exact equality: any divergence between the scanned
    /// maximum mtime and the baseline makes the unit stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit's source tree cannot be scanned.
    pub async fn is_fresh(&self, ctx: &ServiceContext, unit: &Unit) -> Result<FileVerdict, String> {
        let mut verdicts = self.verdicts.lock().await;
        if let Some(&fresh) = verdicts.get(&unit.path) {
            return Ok(FileVerdict { fresh, from_cache: true });
        }

        let baseline = self.log.last_build_time(&unit.path).unwrap_or_else(|| ctx.clock.now());
        let scan_root = unit.dir.join(SOURCE_SUBDIR);
        let latest = ctx
            .scanner
            .latest_modification(&scan_root)
            .await
            .map_err(|e| format!("failed to scan sources of {}: {e}", unit.path))?;

        let fresh = latest == baseline;
        verdicts.insert(unit.path.clone(), fresh);
        Ok(FileVerdict { fresh, from_cache: false })
    }
}
