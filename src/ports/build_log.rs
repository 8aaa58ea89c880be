//! Previous-run build log port.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key suffix distinguishing build entries in the log.
const BUILD_KEY_SUFFIX: &str = "#build";

/// One recorded entry in the previous-run log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The newest source modification time observed when the unit was last
    /// built successfully.
    pub last_modified: DateTime<Utc>,
}

/// The previous run's timestamps, loaded wholesale before an audit.
///
/// Keyed by `"<unit-path>#build"`. Read-only for the audit core; writing the
/// next run's log back is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildLog {
    /// Raw key-value entries as persisted.
    #[serde(default)]
    pub entries: HashMap<String, LogEntry>,
}

impl BuildLog {
    /// Returns the baseline timestamp recorded for a unit's last build, if
    /// the unit has ever been built.
    #[must_use]
    pub fn last_build_time(&self, unit_path: &str) -> Option<DateTime<Utc>> {
        self.entries.get(&format!("{unit_path}{BUILD_KEY_SUFFIX}")).map(|e| e.last_modified)
    }

    /// Records a baseline timestamp for a unit. Used by callers assembling
    /// the next run's log and by tests.
    pub fn record(&mut self, unit_path: &str, last_modified: DateTime<Utc>) {
        self.entries
            .insert(format!("{unit_path}{BUILD_KEY_SUFFIX}"), LogEntry { last_modified });
    }
}

/// Loads the persisted previous-run log.
pub trait BuildLogStore: Send + Sync {
    /// Loads the whole log. A store with no persisted log yet returns an
    /// empty one.
    ///
    /// # Errors
    ///
    /// Returns an error if a persisted log exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<BuildLog, Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn last_build_time_looks_up_suffixed_key() {
        let mut log = BuildLog::default();
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        log.record("pkgs/app", ts);

        assert!(log.entries.contains_key("pkgs/app#build"));
        assert_eq!(log.last_build_time("pkgs/app"), Some(ts));
        assert_eq!(log.last_build_time("pkgs/lib"), None);
    }

    #[test]
    fn log_round_trips_through_yaml() {
        let mut log = BuildLog::default();
        log.record("pkgs/app", Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());

        let yaml = serde_yaml::to_string(&log).unwrap();
        let parsed: BuildLog = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, log);
    }
}
