//! Live source scanner: a recursive stat walk over a unit's source tree.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::ports::scanner::{ScanFuture, SourceScanner};

/// Live scanner backed by real disk I/O.
///
/// The walk is blocking std::fs work, so it runs under `spawn_blocking` to
/// keep the cooperative scheduler responsive while several audits are in
/// flight.
pub struct LiveSourceScanner;

impl SourceScanner for LiveSourceScanner {
    fn latest_modification<'a>(&'a self, root: &'a Path) -> ScanFuture<'a> {
        let root = root.to_path_buf();
        Box::pin(async move {
            tokio::task::spawn_blocking(move || walk_latest(&root))
                .await
                .map_err(|e| format!("scan task failed: {e}"))?
        })
    }
}

/// Walks `dir` recursively and returns the maximum modification time found.
///
/// The walk is seeded with the directory's own mtime, so an existing but
/// empty source tree still yields a timestamp. A missing directory is an
/// error.
fn walk_latest(dir: &Path) -> Result<DateTime<Utc>, Box<dyn std::error::Error + Send + Sync>> {
    let mut latest: DateTime<Utc> = DateTime::from(std::fs::metadata(dir)?.modified()?);
    let mut pending: Vec<PathBuf> = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let modified: DateTime<Utc> = DateTime::from(entry.metadata()?.modified()?);
            if modified > latest {
                latest = modified;
            }
            if file_type.is_dir() {
                pending.push(entry.path());
            }
        }
    }

    Ok(latest)
}
