use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a check run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("The provided path is not a valid directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Snapshot {} is corrupt: {source}", path.display())]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write snapshot {}: {source}", path.display())]
    SnapshotWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
