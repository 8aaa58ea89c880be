//! Source scanner port — the freshness oracle.

use std::error::Error;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use chrono::{DateTime, Utc};

/// Boxed future type alias used by [`SourceScanner`] to keep the trait
/// dyn-compatible.
pub type ScanFuture<'a> =
    Pin<Box<dyn Future<Output = Result<DateTime<Utc>, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Answers "when did anything under this directory last change?".
///
/// This is the expensive, I/O-bound leaf of the audit: a recursive walk over
/// a unit's source tree returning the maximum modification time found. The
/// audit core treats it as an oracle and never invokes it more than once per
/// unit per run (see `audit::cache`).
pub trait SourceScanner: Send + Sync {
    /// Returns the latest modification timestamp found under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is missing or unreadable.
    fn latest_modification<'a>(&'a self, root: &'a Path) -> ScanFuture<'a>;
}
