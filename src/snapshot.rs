use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::scanner::PathDigestMap;

/// Snapshot file name used when no location is configured.
pub const DEFAULT_SNAPSHOT: &str = "hash_database.json";

/// Persists the path-to-digest baseline between runs as a JSON object.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        SnapshotStore::new(DEFAULT_SNAPSHOT)
    }
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored baseline. A missing file is an empty baseline;
    /// a file that does not parse is an error.
    pub fn load(&self) -> Result<PathDigestMap> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No previous snapshot");
                return Ok(PathDigestMap::new());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let map: PathDigestMap =
            serde_json::from_str(&text).map_err(|source| Error::SnapshotParse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), entries = map.len(), "Loaded snapshot");
        Ok(map)
    }

    /// Replace the stored baseline with `hashes`.
    ///
    /// Written to a sibling temp file, then renamed over the snapshot.
    pub fn save(&self, hashes: &PathDigestMap) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        hashes
            .serialize(&mut ser)
            .map_err(|e| self.write_error(io::Error::new(io::ErrorKind::Other, e)))?;
        buf.push(b'\n');

        let temp_path = self.temp_path();
        write_synced(&temp_path, &buf).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            self.write_error(e)
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            self.write_error(e)
        })?;

        debug!(path = %self.path.display(), entries = hashes.len(), "Saved snapshot");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_SNAPSHOT.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: io::Error) -> Error {
        Error::SnapshotWrite {
            path: self.path.clone(),
            source,
        }
    }
}

fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}
