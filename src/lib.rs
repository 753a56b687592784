pub mod checker;
pub mod differ;
pub mod error;
pub mod hasher;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod snapshot;

pub use checker::{check, compare, Comparison};
pub use differ::{diff, DiffResult};
pub use error::{Error, Result};
pub use hasher::{hash_file, Digest, HashOutcome};
pub use scanner::{scan_directory, PathDigestMap};
pub use snapshot::SnapshotStore;
