//! Content hashing
//!
//! Streaming SHA-256 digest of a file. The file is fed through the
//! hasher in bounded chunks, never loaded whole.

use std::fs::File;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::FmError;
use crate::transfer::stream_copy;

/// Digest `path` with SHA-256 and return the lowercase hex string.
pub fn digest_file(path: &Path, buffer_size: usize) -> Result<String, FmError> {
    let mut file = File::open(path).map_err(|e| FmError::from_io(path.to_path_buf(), e))?;
    let mut hasher = Sha256::new();

    stream_copy(&mut file, &mut hasher, buffer_size).map_err(|e| FmError::Stream {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // SHA-256 of the empty input.
    const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbe4f8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_empty_file_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        File::create(&path).unwrap();

        assert_eq!(digest_file(&path, 8192).unwrap(), EMPTY_DIGEST);
    }

    #[test]
    fn test_digest_is_deterministic_and_lowercase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"the quick brown fox").unwrap();
        drop(file);

        let first = digest_file(&path, 7).unwrap();
        let second = digest_file(&path, 8192).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert_eq!(first, first.to_lowercase());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");

        assert!(matches!(
            digest_file(&path, 8192),
            Err(FmError::NotFound(_))
        ));
    }
}
