//! Shared fakes for audit engine tests: a scripted scanner, a fixed clock,
//! and an in-memory project model.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::context::ServiceContext;
use crate::ports::build_log::{BuildLog, BuildLogStore};
use crate::ports::clock::Clock;
use crate::ports::project::{DependencyRef, ProjectModel, Unit};
use crate::ports::scanner::{ScanFuture, SourceScanner};

/// Fixture root all fake units live under.
const FIXTURE_ROOT: &str = "/project";

/// Shorthand for a UTC timestamp at `secs` past the epoch.
pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// Builds a unit whose name equals the last path segment and whose
/// dependencies all pin version `1.0.0`.
pub fn unit(path: &str, deps: &[&str]) -> Unit {
    let name = path.rsplit('/').next().unwrap_or(path).to_string();
    Unit {
        path: path.to_string(),
        dir: PathBuf::from(FIXTURE_ROOT).join(path),
        name,
        version: "1.0.0".to_string(),
        dependencies: deps
            .iter()
            .map(|name| DependencyRef { name: (*name).to_string(), version: "1.0.0".to_string() })
            .collect(),
    }
}

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scanner that serves scripted timestamps keyed by unit path and records
/// every scan it performs.
#[derive(Clone)]
pub struct ScriptedScanner {
    timestamps: Arc<HashMap<PathBuf, DateTime<Utc>>>,
    /// Scan roots in call order; clone this handle before boxing the scanner
    /// into a context to assert on call counts afterwards.
    pub calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl ScriptedScanner {
    /// Scripts one timestamp per unit path. The scanner answers for the
    /// unit's conventional `src/` scan root.
    pub fn new(entries: &[(&str, DateTime<Utc>)]) -> Self {
        let timestamps = entries
            .iter()
            .map(|(path, time)| (PathBuf::from(FIXTURE_ROOT).join(path).join("src"), *time))
            .collect();
        Self { timestamps: Arc::new(timestamps), calls: Arc::new(Mutex::new(Vec::new())) }
    }
}

impl SourceScanner for ScriptedScanner {
    fn latest_modification<'a>(&'a self, root: &'a std::path::Path) -> ScanFuture<'a> {
        self.calls.lock().unwrap().push(root.to_path_buf());
        Box::pin(async move {
            self.timestamps
                .get(root)
                .copied()
                .ok_or_else(|| format!("no such directory: {}", root.display()).into())
        })
    }
}

/// In-memory project model over a fixed unit list. Every unit is a target;
/// dependencies resolve by name and version.
pub struct StaticProject {
    units: Vec<Unit>,
}

impl StaticProject {
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }
}

impl ProjectModel for StaticProject {
    fn restore_installed_state(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }

    fn target_units(&self) -> Vec<Unit> {
        self.units.clone()
    }

    fn resolve_dependency(&self, dep: &DependencyRef) -> Option<Unit> {
        self.units.iter().find(|u| u.name == dep.name && u.version == dep.version).cloned()
    }
}

/// Build log store serving a pre-assembled in-memory log.
pub struct StaticLog(pub BuildLog);

impl BuildLogStore for StaticLog {
    fn load(&self) -> Result<BuildLog, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.0.clone())
    }
}

/// Assembles a context from fake adapters with an empty build log store.
pub fn context_with(units: Vec<Unit>, scanner: ScriptedScanner, now: DateTime<Utc>) -> ServiceContext {
    ServiceContext {
        clock: Box::new(FixedClock(now)),
        scanner: Box::new(scanner),
        project: Box::new(StaticProject::new(units)),
        build_log: Box::new(StaticLog(BuildLog::default())),
    }
}

/// Assembles a context whose log store serves `log`.
pub fn context_with_log(
    units: Vec<Unit>,
    scanner: ScriptedScanner,
    log: BuildLog,
    now: DateTime<Utc>,
) -> ServiceContext {
    ServiceContext {
        clock: Box::new(FixedClock(now)),
        scanner: Box::new(scanner),
        project: Box::new(StaticProject::new(units)),
        build_log: Box::new(StaticLog(log)),
    }
}

/// A log in which every listed unit was last built at the given timestamp,
/// so a scanner scripted with the same timestamps reports everything fresh.
pub fn log_matching(entries: &[(&str, DateTime<Utc>)]) -> BuildLog {
    let mut log = BuildLog::default();
    for (path, time) in entries {
        log.record(path, *time);
    }
    log
}
