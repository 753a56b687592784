use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest as _, Sha256};

/// Read buffer size used when streaming file content into the hasher.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Stored digest of a file: lowercase SHA-256 hex, or `None` if it could not be read.
pub type Digest = Option<String>;

/// Result of hashing a single file.
#[derive(Debug)]
pub enum HashOutcome {
    Hashed(String),
    Unreadable(io::Error),
}

impl HashOutcome {
    pub fn into_digest(self) -> Digest {
        match self {
            HashOutcome::Hashed(hex) => Some(hex),
            HashOutcome::Unreadable(_) => None,
        }
    }
}

/// Hash file contents with SHA-256, reading in `CHUNK_SIZE` pieces.
pub fn hash_file(path: &Path) -> HashOutcome {
    match stream_hash(path) {
        Ok(hex) => HashOutcome::Hashed(hex),
        Err(e) => HashOutcome::Unreadable(e),
    }
}

fn stream_hash(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Hash a byte slice directly.
pub fn hash_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
