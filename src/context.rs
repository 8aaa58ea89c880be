//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::{LiveClock, LiveSourceScanner, ManifestProjectModel, YamlBuildLogStore};
use crate::ports::build_log::BuildLogStore;
use crate::ports::clock::Clock;
use crate::ports::project::ProjectModel;
use crate::ports::scanner::SourceScanner;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Tests construct a
/// context directly from fake adapters; the CLI uses [`ServiceContext::live`].
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Source scanner answering when a unit's files last changed.
    pub scanner: Box<dyn SourceScanner>,
    /// Project model exposing units and dependency resolution.
    pub project: Box<dyn ProjectModel>,
    /// Store holding the previous run's build timestamps.
    pub build_log: Box<dyn BuildLogStore>,
}

impl ServiceContext {
    /// Creates a live context for the project rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if no project manifest exists at `root` or the
    /// manifest cannot be parsed.
    pub fn live(root: &Path) -> Result<Self, String> {
        Ok(Self {
            clock: Box::new(LiveClock),
            scanner: Box::new(LiveSourceScanner),
            project: Box::new(ManifestProjectModel::load(root)?),
            build_log: Box::new(YamlBuildLogStore::new(root)),
        })
    }
}
