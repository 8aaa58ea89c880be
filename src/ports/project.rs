//! Project model port: the source of units and their dependency edges.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A reference from one unit to a dependency, by package descriptor.
///
/// The descriptor — not the resolved unit — is the cycle-detection key
/// during an audit, since two different descriptors can legitimately
/// resolve to the same unit without forming a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRef {
    /// Package name of the dependency.
    pub name: String,
    /// Version the depending unit asks for.
    pub version: String,
}

impl DependencyRef {
    /// Renders the `name@version` key identifying this edge.
    #[must_use]
    pub fn edge_key(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// One buildable component of the project.
///
/// Identified by a stable path-like key relative to the project root. The
/// audit core treats units as read-only data owned by the project model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Stable path-like key, relative to the project root (e.g. `pkgs/app`).
    pub path: String,
    /// Absolute on-disk location of the unit.
    pub dir: PathBuf,
    /// Package name, matched against [`DependencyRef::name`].
    pub name: String,
    /// Package version, matched against [`DependencyRef::version`].
    pub version: String,
    /// Dependency edges in the order the project model enumerates them.
    pub dependencies: Vec<DependencyRef>,
}

/// Exposes a project's units and resolves dependency references.
pub trait ProjectModel: Send + Sync {
    /// Restores any persisted install/build state the model needs before an
    /// audit can run. Called once per project audit.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted state cannot be restored.
    fn restore_installed_state(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Returns the units that can be targeted by an audit.
    ///
    /// The implicit project root — a unit that only aggregates others — is
    /// never a target and is excluded here.
    fn target_units(&self) -> Vec<Unit>;

    /// Resolves a dependency reference to an in-project unit.
    ///
    /// Returns `None` for external dependencies; the audit skips those
    /// edges, as their freshness is not tracked.
    fn resolve_dependency(&self, dep: &DependencyRef) -> Option<Unit>;
}
