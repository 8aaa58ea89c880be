//! Report model produced by an audit and consumed by the inspector.

use std::collections::BTreeMap;

use serde::Serialize;

/// Annotated freshness record for one visited unit.
///
/// Verdict fields start out unset and are filled in as the traversal
/// progresses. Two shapes exist:
///
/// - a *cycle terminator* has only [`loops_back_to_parent`] set (to `true`)
///   and carries no children — the traversal stopped there;
/// - a fully processed node has `is_fresh`, `dependencies_were_fresh` and
///   `files_were_fresh` all set, with
///   `is_fresh == (dependencies_were_fresh && files_were_fresh)`.
///
/// [`loops_back_to_parent`]: UnitReport::loops_back_to_parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    /// Path key of the unit this report describes.
    pub unit: String,
    /// Overall verdict: own files and every transitive dependency fresh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fresh: Option<bool>,
    /// Set when this node was reached over an edge already on the current
    /// traversal path. Such a node is a leaf; nothing else is evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loops_back_to_parent: Option<bool>,
    /// Whether every direct dependency subtree ended up fresh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies_were_fresh: Option<bool>,
    /// Whether the unit's own files were unchanged since its baseline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_were_fresh: Option<bool>,
    /// Whether the own-files verdict came from a cache hit. Diagnostic only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_freshness_from_cache: Option<bool>,
    /// Child reports keyed by `name@version` dependency edge.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, UnitReport>,
}

impl UnitReport {
    /// Creates an empty report for a unit, verdicts pending.
    #[must_use]
    pub fn new(unit: &str) -> Self {
        Self {
            unit: unit.to_string(),
            is_fresh: None,
            loops_back_to_parent: None,
            dependencies_were_fresh: None,
            files_were_fresh: None,
            file_freshness_from_cache: None,
            dependencies: BTreeMap::new(),
        }
    }

    /// Creates a cycle-terminator leaf for a unit.
    #[must_use]
    pub fn cycle(unit: &str) -> Self {
        let mut report = Self::new(unit);
        report.loops_back_to_parent = Some(true);
        report
    }

    /// Returns `true` if this node ended a traversal branch as a cycle.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        self.loops_back_to_parent == Some(true)
    }
}

/// Per-project audit result: one root report per targeted unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    /// Root reports keyed by unit path, targets only. Reports for units
    /// reached as dependencies stay nested inside these roots.
    pub units: BTreeMap<String, UnitReport>,
}

impl ProjectReport {
    /// Returns `true` if every targeted unit ended fresh.
    #[must_use]
    pub fn all_fresh(&self) -> bool {
        self.units.values().all(|r| r.is_fresh == Some(true))
    }
}

/// Directive to rebuild one unit.
///
/// The instruction list produced by [`crate::audit::unroll`] may name the
/// same unit more than once; deduplication is the build executor's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInstruction {
    /// Path key of the unit to rebuild.
    pub unit: String,
}
