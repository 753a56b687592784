use std::collections::BTreeSet;

use crate::scanner::PathDigestMap;

/// Paths that differ between a baseline and a fresh scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// In the current scan only.
    pub added: BTreeSet<String>,
    /// In the baseline only.
    pub removed: BTreeSet<String>,
    /// In both, with different digests. An entry that became unreadable
    /// lands here, not in `removed`.
    pub changed: BTreeSet<String>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}

/// Classify every path of `previous` and `current` by membership and digest.
pub fn diff(previous: &PathDigestMap, current: &PathDigestMap) -> DiffResult {
    let mut result = DiffResult::default();

    for (path, old) in previous {
        match current.get(path) {
            None => {
                result.removed.insert(path.clone());
            }
            Some(new) if new != old => {
                result.changed.insert(path.clone());
            }
            Some(_) => {}
        }
    }

    result.added = current
        .keys()
        .filter(|path| !previous.contains_key(*path))
        .cloned()
        .collect();

    result
}
