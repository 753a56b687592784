use std::path::Path;

use tracing::{debug, info};

use crate::differ::{diff, DiffResult};
use crate::error::{Error, Result};
use crate::scanner::{scan_directory, PathDigestMap};
use crate::snapshot::SnapshotStore;

/// A fresh scan compared against the stored baseline, not yet persisted.
#[derive(Debug)]
pub struct Comparison {
    pub current: PathDigestMap,
    pub result: DiffResult,
}

impl Comparison {
    /// Replace the baseline in `store` with the fresh scan.
    pub fn commit(&self, store: &SnapshotStore) -> Result<()> {
        store.save(&self.current)?;
        info!(
            snapshot = %store.path().display(),
            files = self.current.len(),
            "Baseline updated"
        );
        Ok(())
    }
}

/// Scan `root` and diff it against the baseline held by `store`.
///
/// Nothing is written. An invalid `root` fails before the store is read.
pub fn compare(root: &Path, store: &SnapshotStore) -> Result<Comparison> {
    if !root.is_dir() {
        return Err(Error::InvalidDirectory(root.to_path_buf()));
    }

    let current = scan_directory(root)?;
    let previous = store.load()?;

    let result = diff(&previous, &current);
    debug!(
        root = %root.display(),
        added = result.added.len(),
        removed = result.removed.len(),
        changed = result.changed.len(),
        "Compared against baseline"
    );

    Ok(Comparison { current, result })
}

/// Compare `root` against the baseline, then always replace the baseline.
pub fn check(root: &Path, store: &SnapshotStore) -> Result<DiffResult> {
    let comparison = compare(root, store)?;
    comparison.commit(store)?;
    Ok(comparison.result)
}
