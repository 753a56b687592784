use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::hasher::{hash_file, Digest, HashOutcome};

/// Root-relative path (always `/`-separated) to digest.
pub type PathDigestMap = BTreeMap<String, Digest>;

/// Scan a directory recursively, hashing every file beneath it.
///
/// Symlinks to regular files are hashed through the link; links to
/// directories or special files are skipped. Subdirectories that cannot be
/// listed are skipped. Failing to list `root` itself is an error.
pub fn scan_directory(root: &Path) -> io::Result<PathDigestMap> {
    let mut hashes = PathDigestMap::new();
    let entries = fs::read_dir(root)?;
    scan_entries(entries, "", &mut hashes);
    debug!(root = %root.display(), files = hashes.len(), "Scanned directory");
    Ok(hashes)
}

fn scan_entries(entries: fs::ReadDir, prefix: &str, hashes: &mut PathDigestMap) {
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        let name = name_key(&entry.file_name());
        let rel_path = if prefix.is_empty() {
            name
        } else {
            format!("{}/{}", prefix, name)
        };
        let path = entry.path();

        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                warn!(path = %path.display(), "Skipping entry with unknown type: {}", e);
                continue;
            }
        };

        if file_type.is_dir() {
            match fs::read_dir(&path) {
                Ok(children) => scan_entries(children, &rel_path, hashes),
                Err(e) => warn!(path = %path.display(), "Skipping unreadable directory: {}", e),
            }
            continue;
        }

        if file_type.is_symlink() {
            // Dangling links fall through and get an absent digest
            if let Ok(target) = fs::metadata(&path) {
                if !target.is_file() {
                    debug!(path = %path.display(), "Skipping link to non-regular file");
                    continue;
                }
            }
        } else if !file_type.is_file() {
            continue;
        }

        let digest = match hash_file(&path) {
            HashOutcome::Hashed(hex) => Some(hex),
            HashOutcome::Unreadable(e) => {
                warn!(path = %path.display(), "Cannot read file, recording no hash: {}", e);
                None
            }
        };
        if hashes.contains_key(&rel_path) {
            warn!(
                path = %path.display(),
                key = %rel_path,
                "Escaped name collides with another entry"
            );
        }
        hashes.insert(rel_path, digest);
    }
}

/// Map a file name to a key component. Valid UTF-8 is kept as is; each
/// byte that is not part of a valid UTF-8 sequence becomes `%XX`.
#[cfg(unix)]
fn name_key(name: &OsStr) -> String {
    use std::os::unix::ffi::OsStrExt;

    if let Some(s) = name.to_str() {
        return s.to_string();
    }

    let mut key = String::new();
    let mut bytes = name.as_bytes();
    while !bytes.is_empty() {
        match std::str::from_utf8(bytes) {
            Ok(s) => {
                key.push_str(s);
                break;
            }
            Err(e) => {
                let (valid, rest) = bytes.split_at(e.valid_up_to());
                key.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let bad = e.error_len().unwrap_or(rest.len());
                for b in &rest[..bad] {
                    key.push_str(&format!("%{:02X}", b));
                }
                bytes = &rest[bad..];
            }
        }
    }
    key
}

#[cfg(not(unix))]
fn name_key(name: &OsStr) -> String {
    name.to_string_lossy().to_string()
}
