//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the audit core and an external
//! system (time, source-tree scanning, the project model, the previous-run
//! build log). Implementations live in `src/adapters/`.

pub mod build_log;
pub mod clock;
pub mod project;
pub mod scanner;

pub use build_log::{BuildLog, BuildLogStore, LogEntry};
pub use clock::Clock;
pub use project::{DependencyRef, ProjectModel, Unit};
pub use scanner::{ScanFuture, SourceScanner};
