//! Manifest-backed project model.
//!
//! Reads `<root>/drift.yaml`, which declares every unit of the project:
//!
//! ```text
//! units:
//!   - path: pkgs/app
//!     name: app
//!     version: "1.0.0"
//!     dependencies:
//!       - name: lib
//!         version: "1.0.0"
//!   - path: .
//!     name: everything
//!     version: "0.0.0"
//!     root: true
//! ```
//!
//! A unit marked `root: true` is the implicit project root that only
//! aggregates other units; it is never an audit target but still resolves
//! as a dependency.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ports::project::{DependencyRef, ProjectModel, Unit};

/// Name of the project manifest file, relative to the project root.
pub const MANIFEST_FILE: &str = "drift.yaml";

#[derive(Debug, Deserialize)]
struct Manifest {
    units: Vec<ManifestUnit>,
}

#[derive(Debug, Deserialize)]
struct ManifestUnit {
    path: String,
    name: String,
    version: String,
    #[serde(default)]
    root: bool,
    #[serde(default)]
    dependencies: Vec<DependencyRef>,
}

/// Project model loaded from a `drift.yaml` manifest.
#[derive(Debug)]
pub struct ManifestProjectModel {
    units: Vec<Unit>,
    root_unit_paths: Vec<String>,
}

impl ManifestProjectModel {
    /// Loads the manifest under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if no manifest exists at `root` (no project there)
    /// or if the manifest cannot be parsed.
    pub fn load(root: &Path) -> Result<Self, String> {
        let manifest_path = root.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            return Err(format!(
                "no project found at {}: missing {MANIFEST_FILE}",
                root.display()
            ));
        }
        let contents = std::fs::read_to_string(&manifest_path)
            .map_err(|e| format!("failed to read {}: {e}", manifest_path.display()))?;
        let manifest: Manifest = serde_yaml::from_str(&contents)
            .map_err(|e| format!("failed to parse {}: {e}", manifest_path.display()))?;

        let mut units = Vec::new();
        let mut root_unit_paths = Vec::new();
        for entry in manifest.units {
            if entry.root {
                root_unit_paths.push(entry.path.clone());
            }
            units.push(Unit {
                dir: absolute_dir(root, &entry.path),
                path: entry.path,
                name: entry.name,
                version: entry.version,
                dependencies: entry.dependencies,
            });
        }

        Ok(Self { units, root_unit_paths })
    }
}

impl ProjectModel for ManifestProjectModel {
    fn restore_installed_state(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        for unit in &self.units {
            if !unit.dir.is_dir() {
                return Err(format!(
                    "unit {} has no directory at {}",
                    unit.path,
                    unit.dir.display()
                )
                .into());
            }
        }
        Ok(())
    }

    fn target_units(&self) -> Vec<Unit> {
        self.units
            .iter()
            .filter(|u| !self.root_unit_paths.contains(&u.path))
            .cloned()
            .collect()
    }

    fn resolve_dependency(&self, dep: &DependencyRef) -> Option<Unit> {
        self.units.iter().find(|u| u.name == dep.name && u.version == dep.version).cloned()
    }
}

fn absolute_dir(root: &Path, unit_path: &str) -> PathBuf {
    if unit_path == "." {
        root.to_path_buf()
    } else {
        root.join(unit_path)
    }
}
