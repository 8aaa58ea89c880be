//! Live adapters backed by the real clock and filesystem.

pub mod build_log;
pub mod clock;
pub mod project;
pub mod scanner;

pub use build_log::YamlBuildLogStore;
pub use clock::LiveClock;
pub use project::ManifestProjectModel;
pub use scanner::LiveSourceScanner;
