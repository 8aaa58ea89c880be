//! YAML-file build log store.

use std::path::{Path, PathBuf};

use crate::ports::build_log::{BuildLog, BuildLogStore};

/// Location of the persisted log, relative to the project root.
pub const LOG_FILE: &str = ".drift/build-log.yaml";

/// Build log store persisted as a YAML file under the project root.
pub struct YamlBuildLogStore {
    path: PathBuf,
}

impl YamlBuildLogStore {
    /// Creates a store for the project rooted at `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self { path: root.join(LOG_FILE) }
    }
}

impl BuildLogStore for YamlBuildLogStore {
    fn load(&self) -> Result<BuildLog, Box<dyn std::error::Error + Send + Sync>> {
        if !self.path.exists() {
            // First run: nothing has ever been built.
            return Ok(BuildLog::default());
        }
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| format!("failed to read {}: {e}", self.path.display()))?;
        let log = serde_yaml::from_str(&contents)
            .map_err(|e| format!("failed to parse {}: {e}", self.path.display()))?;
        Ok(log)
    }
}
